//! Ruleflow Runtime - Conditional dispatch and event delivery
//!
//! This crate turns condition trees from `ruleflow-core` into runnable
//! rules and delivers named events to registered handlers:
//! - `dispatcher`: the IF family of rule constructors and sequential `run`
//! - `event`: the `Handler` capability and the synchronous `EventBus`
//! - `config`: bus configuration loaded from YAML
//! - `observability`: counters and timings collected by the bus

pub mod config;
pub mod dispatcher;
pub mod event;
pub mod observability;

// Re-export main types
pub use config::BusConfig;
pub use dispatcher::{if_not_then, if_then, if_then_else, run, Rule, RuleBuilder};
pub use event::{handler_fn, EventBus, Handler, HandlerFn, SharedHandler};
pub use observability::{Metrics, MetricsCollector};
pub use ruleflow_core::{Result, RuleError};
