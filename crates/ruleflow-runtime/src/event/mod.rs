//! Named events and their handlers
//!
//! Handlers are registered on an [`EventBus`] under an event name and are
//! invoked synchronously, in registration order, every time that event is
//! fired. A [`Rule`](crate::dispatcher::Rule) is itself a handler, so rules
//! can be attached to events directly.

mod bus;

pub use bus::EventBus;

use ruleflow_core::Result;
use std::fmt;
use std::rc::Rc;

/// Receiver of a fired event
pub trait Handler<A: ?Sized> {
    fn invoke(&self, args: &mut A) -> Result<()>;
}

/// A handler that can be registered more than once or on several events
pub type SharedHandler<A> = Rc<dyn Handler<A>>;

impl<A: ?Sized, T: Handler<A> + ?Sized> Handler<A> for &T {
    fn invoke(&self, args: &mut A) -> Result<()> {
        (**self).invoke(args)
    }
}

impl<A: ?Sized, T: Handler<A> + ?Sized> Handler<A> for Box<T> {
    fn invoke(&self, args: &mut A) -> Result<()> {
        (**self).invoke(args)
    }
}

impl<A: ?Sized, T: Handler<A> + ?Sized> Handler<A> for Rc<T> {
    fn invoke(&self, args: &mut A) -> Result<()> {
        (**self).invoke(args)
    }
}

/// Closure-backed handler, see [`handler_fn`]
#[derive(Clone)]
pub struct HandlerFn<F>(F);

/// Build a handler from a closure
pub fn handler_fn<A: ?Sized, F>(f: F) -> HandlerFn<F>
where
    F: Fn(&mut A) -> Result<()>,
{
    HandlerFn(f)
}

impl<A: ?Sized, F> Handler<A> for HandlerFn<F>
where
    F: Fn(&mut A) -> Result<()>,
{
    fn invoke(&self, args: &mut A) -> Result<()> {
        (self.0)(args)
    }
}

impl<F> fmt::Debug for HandlerFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("HandlerFn")
    }
}
