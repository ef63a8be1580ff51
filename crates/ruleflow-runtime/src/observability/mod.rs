//! Observability for rule dispatch and event delivery

pub mod metrics;

pub use metrics::{Counter, Histogram, Metrics, MetricsCollector};
