//! Event rules example
//!
//! This example demonstrates:
//! - Loading bus configuration from YAML
//! - Registering rules and plain handlers on named events
//! - Reading the counters the bus collects

use ruleflow_core::{action_fn, and, predicate, Comparison, Condition, SharedAction};
use ruleflow_runtime::{handler_fn, BusConfig, EventBus, Rule};
use std::rc::Rc;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Default)]
struct Order {
    amount: f64,
    country: String,
    flagged: bool,
    notifications: Vec<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Event Rules Example ===\n");

    let config = BusConfig::from_yaml_str(
        r#"
enable_metrics: true
warn_on_unhandled: true
"#,
    )?;
    let mut bus: EventBus<Order> = EventBus::with_config(config);

    let leaf = Comparison::parse(">=", 2, 1)?;
    println!(
        "Leaf {} {} {} evaluates to {}",
        leaf.lhs,
        leaf.operator,
        leaf.rhs,
        leaf.evaluate(&())?
    );

    let high_risk = and!(
        predicate(|order: &Order| order.amount > 1000.0),
        predicate(|order: &Order| order.country != "US"),
    );

    let flag: SharedAction<Order> = Rc::new(action_fn(|order: &mut Order| {
        order.flagged = true;
        Ok(())
    }));
    let notify: SharedAction<Order> = Rc::new(action_fn(|order: &mut Order| {
        order.notifications.push(format!("review order of {:.2}", order.amount));
        Ok(())
    }));

    let review = Rule::when(high_risk)
        .named("high_risk_review")
        .then_shared(flag)
        .then_shared(notify)
        .otherwise(action_fn(|order: &mut Order| {
            order.notifications.push("auto-approved".to_string());
            Ok(())
        }))
        .build();

    bus.on("order_created", review);
    bus.on(
        "order_created",
        handler_fn(|order: &mut Order| {
            println!("  audit: amount={} country={}", order.amount, order.country);
            Ok(())
        }),
    );

    for (amount, country) in [(2500.0, "DE"), (2500.0, "US"), (40.0, "FR")] {
        let mut order = Order {
            amount,
            country: country.to_string(),
            ..Default::default()
        };
        bus.fire("order_created", &mut order)?;
        println!(
            "order {:.2} {} -> flagged={} notifications={:?}",
            order.amount, order.country, order.flagged, order.notifications
        );
    }

    bus.fire("order_cancelled", &mut Order::default())?;

    if let Some(metrics) = bus.metrics() {
        println!("\nMetrics:");
        for name in ["events_fired", "events_unhandled", "handlers_invoked"] {
            println!("  {}: {}", name, metrics.counter(name).get());
        }
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
