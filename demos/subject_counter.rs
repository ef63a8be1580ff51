//! Subject counter example
//!
//! This example demonstrates:
//! - Writing conditions and actions as closures over an evaluation context
//! - Combining conditions with `or!`
//! - Running several rules against one context with `run`

use ruleflow_core::condition::or;
use ruleflow_core::{action_fn, predicate, share, SharedAction};
use ruleflow_runtime::{run, Rule};
use std::rc::Rc;
use tracing_subscriber::EnvFilter;

struct Subject {
    identifier: String,
    counter: i32,
}

struct EvaluationContext {
    subject: Subject,
    username: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Subject Counter Example ===\n");

    let is_admin = share(predicate(|ctx: &EvaluationContext| ctx.username == "admin"));
    let has_zero_count = share(predicate(|ctx: &EvaluationContext| ctx.subject.counter == 0));

    let increment: SharedAction<EvaluationContext> =
        Rc::new(action_fn(|ctx: &mut EvaluationContext| {
            ctx.subject.counter += 1;
            Ok(())
        }));
    let decrement: SharedAction<EvaluationContext> =
        Rc::new(action_fn(|ctx: &mut EvaluationContext| {
            ctx.subject.counter -= 1;
            Ok(())
        }));

    let rules = [
        Rule::when(or(vec![is_admin.clone(), has_zero_count]))
            .named("bootstrap")
            .then_shared(increment.clone())
            .build(),
        Rule::when_shared(is_admin.clone())
            .named("admin_decrement")
            .then_shared(decrement)
            .build(),
        Rule::when_shared(is_admin)
            .named("admin_increment")
            .then_shared(increment)
            .build(),
    ];

    for username in ["admin", "guest"] {
        let mut ctx = EvaluationContext {
            subject: Subject {
                identifier: format!("subject_for_{}", username),
                counter: 0,
            },
            username: username.to_string(),
        };

        run(&mut ctx, &[&rules[0], &rules[1], &rules[2]])?;

        println!(
            "{} -> {} counter = {}",
            username, ctx.subject.identifier, ctx.subject.counter
        );
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
