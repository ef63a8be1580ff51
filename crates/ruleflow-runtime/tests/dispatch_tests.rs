//! Integration tests for the IF family and `run`

mod common;

use common::{EvaluationContext, IncrementCounter, Subject, User};
use ruleflow_core::condition::or;
use ruleflow_core::{action_fn, predicate, share, Comparison, SharedAction, SharedCondition};
use ruleflow_runtime::{if_not_then, if_then, if_then_else, run, Rule};
use std::rc::Rc;

fn counter_action<C>(counter: &Rc<IncrementCounter>) -> SharedAction<C> {
    counter.clone()
}

#[test]
fn test_if_then() {
    let counter = Rc::new(IncrementCounter::new());
    let rule = if_then(Comparison::equals(1, 1), vec![counter_action(&counter)]);

    rule.call(&mut ()).unwrap();
    assert_eq!(counter.count(), 1);
}

#[test]
fn test_if_then_false_runs_nothing() {
    let counter = Rc::new(IncrementCounter::new());
    let rule = if_then(Comparison::equals(1, 2), vec![counter_action(&counter)]);

    rule.call(&mut ()).unwrap();
    assert_eq!(counter.count(), 0);
}

#[test]
fn test_if_not_then() {
    let counter = Rc::new(IncrementCounter::new());
    let differs = Comparison::equals("abc", "xyz");
    let rule = if_not_then(differs, vec![counter_action(&counter)]);

    rule.call(&mut ()).unwrap();
    assert_eq!(counter.count(), 1);
}

#[test]
fn test_if_then_else_runs_else_branch_fully() {
    let counter = Rc::new(IncrementCounter::new());
    let incr: SharedAction<()> = counter.clone();

    let rule = if_then_else(
        Comparison::equals("abc", "xyz"),
        vec![incr.clone(), incr.clone()],
        vec![incr.clone(), incr.clone(), incr],
    );
    rule.call(&mut ()).unwrap();

    assert_eq!(counter.count(), 3);
}

#[test]
fn test_exactly_one_branch_per_call() {
    let then_counter = Rc::new(IncrementCounter::new());
    let else_counter = Rc::new(IncrementCounter::new());
    let flag = predicate(|value: &bool| *value);

    let rule = if_then_else(
        flag,
        vec![counter_action(&then_counter)],
        vec![counter_action(&else_counter)],
    );

    rule.call(&mut true).unwrap();
    rule.call(&mut false).unwrap();
    rule.call(&mut false).unwrap();

    assert_eq!(then_counter.count(), 1);
    assert_eq!(else_counter.count(), 2);
}

// =============================================================================
// Rules over a shared context
// =============================================================================

fn inc_subject_counter() -> SharedAction<EvaluationContext> {
    Rc::new(action_fn(|ctx: &mut EvaluationContext| {
        ctx.subject.counter += 1;
        Ok(())
    }))
}

fn is_admin() -> SharedCondition<EvaluationContext> {
    share(predicate(|ctx: &EvaluationContext| ctx.user.username == "admin"))
}

#[test]
fn test_rule_on_context() {
    let subject = Subject::new("subject_1");
    let mut ctx = EvaluationContext::new(subject, User::new("user_1"));

    let has_zero_count = predicate(|ctx: &EvaluationContext| ctx.subject.counter == 0);
    let rule = if_then(has_zero_count, vec![inc_subject_counter()]);
    rule.call(&mut ctx).unwrap();
    rule.call(&mut ctx).unwrap();

    assert_eq!(ctx.subject.counter, 1);
    assert_eq!(ctx.subject.identifier, "subject_1");
}

#[test]
fn test_run_applies_rules_in_order() {
    let subject = Subject::new("subject_2");
    let mut ctx = EvaluationContext::new(subject, User::new("admin"));

    let is_admin = is_admin();
    let has_zero_count = share(predicate(|ctx: &EvaluationContext| ctx.subject.counter == 0));
    let dec_subject_counter: SharedAction<EvaluationContext> =
        Rc::new(action_fn(|ctx: &mut EvaluationContext| {
            ctx.subject.counter -= 1;
            Ok(())
        }));

    let first = if_then(
        or(vec![is_admin.clone(), has_zero_count]),
        vec![inc_subject_counter()],
    );
    let second = Rule::from_shared(is_admin.clone(), vec![dec_subject_counter], Vec::new());
    let third = Rule::when_shared(is_admin)
        .then_shared(inc_subject_counter())
        .build();

    run(&mut ctx, &[&first, &second, &third]).unwrap();
    assert_eq!(ctx.subject.counter, 1);
}

#[test]
fn test_run_with_non_admin_user() {
    let subject = Subject::new("subject_3");
    let mut ctx = EvaluationContext::new(subject, User::new("guest"));
    ctx.subject.counter = 5;

    let is_admin = is_admin();
    let twice = vec![inc_subject_counter(), inc_subject_counter()];
    let first = Rule::from_shared(is_admin.clone(), vec![inc_subject_counter()], Vec::new());
    let second = Rule::from_shared(is_admin, Vec::new(), twice);

    run(&mut ctx, &[&first, &second]).unwrap();
    assert_eq!(ctx.subject.counter, 7);
}

#[test]
fn test_run_stops_at_first_failure() {
    let counter = Rc::new(IncrementCounter::new());
    let failing = Rule::when(Comparison::equals(1, 1))
        .then(action_fn(|_: &mut ()| Err(anyhow::anyhow!("rejected").into())))
        .build();
    let after = if_then(Comparison::equals(1, 1), vec![counter_action(&counter)]);

    let err = run(&mut (), &[&failing, &after]).unwrap_err();
    assert_eq!(err.to_string(), "rejected");
    assert_eq!(counter.count(), 0);
}
