//! Actions: side-effecting steps run by rules

use crate::error::Result;
use std::fmt;
use std::rc::Rc;

/// A unit of work run against a mutable context
///
/// Concrete actions carry their own typed state; the trait only fixes the
/// calling convention.
pub trait Action<C: ?Sized> {
    fn run(&self, ctx: &mut C) -> Result<()>;
}

/// An action shared between several rules
pub type SharedAction<C> = Rc<dyn Action<C>>;

impl<C: ?Sized, T: Action<C> + ?Sized> Action<C> for &T {
    fn run(&self, ctx: &mut C) -> Result<()> {
        (**self).run(ctx)
    }
}

impl<C: ?Sized, T: Action<C> + ?Sized> Action<C> for Box<T> {
    fn run(&self, ctx: &mut C) -> Result<()> {
        (**self).run(ctx)
    }
}

impl<C: ?Sized, T: Action<C> + ?Sized> Action<C> for Rc<T> {
    fn run(&self, ctx: &mut C) -> Result<()> {
        (**self).run(ctx)
    }
}

/// Wrap an action for sharing
pub fn share_action<C: ?Sized, T: Action<C> + 'static>(action: T) -> SharedAction<C> {
    Rc::new(action)
}

/// Closure-backed action, see [`action_fn`]
#[derive(Clone)]
pub struct ActionFn<F>(F);

/// Build an action from a closure
pub fn action_fn<C: ?Sized, F>(f: F) -> ActionFn<F>
where
    F: Fn(&mut C) -> Result<()>,
{
    ActionFn(f)
}

impl<C: ?Sized, F> Action<C> for ActionFn<F>
where
    F: Fn(&mut C) -> Result<()>,
{
    fn run(&self, ctx: &mut C) -> Result<()> {
        (self.0)(ctx)
    }
}

impl<F> fmt::Debug for ActionFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ActionFn")
    }
}
