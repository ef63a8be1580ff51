//! Synchronous event bus

use super::{Handler, SharedHandler};
use crate::config::BusConfig;
use crate::observability::{Metrics, MetricsCollector};
use ruleflow_core::Result;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Instant;

/// Registry mapping event names to ordered handler lists
///
/// The bus is an ordinary value owned by the embedding application. It is
/// not internally synchronized: registration takes `&mut self`, firing takes
/// `&self`, and sharing across threads needs external locking.
pub struct EventBus<A: ?Sized> {
    handlers: HashMap<String, Vec<SharedHandler<A>>>,
    config: BusConfig,
    metrics: Option<Arc<dyn Metrics>>,
}

impl<A: ?Sized> EventBus<A> {
    /// Create an empty bus with default configuration
    pub fn new() -> Self {
        Self::with_config(BusConfig::default())
    }

    /// Create an empty bus
    pub fn with_config(config: BusConfig) -> Self {
        let metrics: Option<Arc<dyn Metrics>> = if config.enable_metrics {
            Some(Arc::new(MetricsCollector::new()))
        } else {
            None
        };

        Self {
            handlers: HashMap::new(),
            config,
            metrics,
        }
    }

    /// Report to `metrics` instead of the built-in collector
    pub fn with_metrics(mut self, metrics: Arc<dyn Metrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn config(&self) -> &BusConfig {
        &self.config
    }

    pub fn metrics(&self) -> Option<&Arc<dyn Metrics>> {
        self.metrics.as_ref()
    }

    /// Append `handler` to the handlers of `event`
    ///
    /// Handlers are never deduplicated; registering the same handler twice
    /// makes it run twice per fire.
    pub fn on<H>(&mut self, event: impl Into<String>, handler: H)
    where
        H: Handler<A> + 'static,
    {
        self.on_shared(event, Rc::new(handler));
    }

    /// Append an already shared handler to the handlers of `event`
    pub fn on_shared(&mut self, event: impl Into<String>, handler: SharedHandler<A>) {
        let event = event.into();
        let handlers = self.handlers.entry(event.clone()).or_default();
        handlers.push(handler);
        tracing::debug!(event = %event, position = handlers.len(), "handler registered");
    }

    /// Invoke every handler of `event` in registration order
    ///
    /// Firing an event with no handlers does nothing. The first handler error
    /// stops dispatch and is returned unchanged; later handlers do not run.
    pub fn fire(&self, event: &str, args: &mut A) -> Result<()> {
        let handlers = match self.handlers.get(event) {
            Some(handlers) if !handlers.is_empty() => handlers,
            _ => {
                if self.config.warn_on_unhandled {
                    tracing::warn!(event, "no handlers registered for event");
                } else {
                    tracing::debug!(event, "no handlers registered for event");
                }
                self.count("events_unhandled");
                return Ok(());
            }
        };

        let started = Instant::now();
        self.count("events_fired");
        tracing::debug!(event, handlers = handlers.len(), "firing event");

        let outcome = self.dispatch(event, handlers, args);

        if let Some(metrics) = &self.metrics {
            metrics.record_execution_time("fire", started.elapsed());
        }
        outcome
    }

    fn dispatch(&self, event: &str, handlers: &[SharedHandler<A>], args: &mut A) -> Result<()> {
        for (index, handler) in handlers.iter().enumerate() {
            let result = handler.invoke(args);
            self.count("handlers_invoked");

            if let Err(err) = result {
                tracing::debug!(
                    event,
                    index,
                    skipped = handlers.len() - index - 1,
                    error = %err,
                    "handler failed, aborting dispatch"
                );
                if let Some(metrics) = &self.metrics {
                    metrics.record_error("handler");
                }
                return Err(err);
            }
        }
        Ok(())
    }

    /// Number of handlers registered for `event`
    pub fn handler_count(&self, event: &str) -> usize {
        self.handlers.get(event).map_or(0, Vec::len)
    }

    pub fn has_handlers(&self, event: &str) -> bool {
        self.handler_count(event) > 0
    }

    /// Names of all events with registered handlers, sorted
    pub fn event_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Drop every registration
    pub fn clear(&mut self) {
        tracing::debug!(events = self.handlers.len(), "clearing event bus");
        self.handlers.clear();
    }

    fn count(&self, name: &str) {
        if let Some(metrics) = &self.metrics {
            metrics.counter(name).inc();
        }
    }
}

impl<A: ?Sized> Default for EventBus<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: ?Sized> fmt::Debug for EventBus<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let registrations: HashMap<&str, usize> = self
            .handlers
            .iter()
            .map(|(event, handlers)| (event.as_str(), handlers.len()))
            .collect();
        f.debug_struct("EventBus")
            .field("handlers", &registrations)
            .field("config", &self.config)
            .field("metrics", &self.metrics.is_some())
            .finish()
    }
}
