//! Condition Module
//!
//! A condition is a boolean-valued predicate over a context value. Conditions
//! compose into trees:
//! - Leaves such as [`Comparison`], [`Constant`] or closure-backed [`Predicate`]s
//! - [`ConditionGroup`]s that combine ordered children with AND or OR
//! - [`Not`] for negation
//!
//! # Short-circuiting
//!
//! Groups visit their children in declaration order and stop as soon as the
//! outcome is decided: AND stops on the first false child, OR on the first
//! true child. Leaves may have side effects, so the stop point is observable.
//!
//! # Example
//!
//! ```
//! use ruleflow_core::{and, or, Comparison, Condition};
//!
//! let condition = or!(
//!     Comparison::equals("abc", 12345),
//!     and!(Comparison::equals("abc", "abc"), Comparison::equals(12345, 12345)),
//! );
//! assert!(condition.evaluate(&()).unwrap());
//! ```

mod comparison;
mod group;
mod operator;

pub use comparison::Comparison;
pub use group::{and, or, Combinator, ConditionGroup};
pub use operator::Operator;

use crate::error::Result;
use std::fmt;
use std::rc::Rc;

/// A boolean-valued predicate evaluated against a context
pub trait Condition<C: ?Sized> {
    /// Evaluate the condition against `ctx`
    fn evaluate(&self, ctx: &C) -> Result<bool>;
}

/// A condition shared between several groups or rules
pub type SharedCondition<C> = Rc<dyn Condition<C>>;

impl<C: ?Sized, T: Condition<C> + ?Sized> Condition<C> for &T {
    fn evaluate(&self, ctx: &C) -> Result<bool> {
        (**self).evaluate(ctx)
    }
}

impl<C: ?Sized, T: Condition<C> + ?Sized> Condition<C> for Box<T> {
    fn evaluate(&self, ctx: &C) -> Result<bool> {
        (**self).evaluate(ctx)
    }
}

impl<C: ?Sized, T: Condition<C> + ?Sized> Condition<C> for Rc<T> {
    fn evaluate(&self, ctx: &C) -> Result<bool> {
        (**self).evaluate(ctx)
    }
}

/// Wrap a condition for sharing
pub fn share<C: ?Sized, T: Condition<C> + 'static>(condition: T) -> SharedCondition<C> {
    Rc::new(condition)
}

/// Combinator methods available on every condition
///
/// `a.and(b)` builds exactly the same group as `and!(a, b)`; nothing is
/// flattened, so nesting mirrors the call structure.
pub trait ConditionExt<C: ?Sized>: Condition<C> + Sized + 'static {
    /// Combine with `other` using AND
    fn and<O: Condition<C> + 'static>(self, other: O) -> ConditionGroup<C> {
        ConditionGroup::and(vec![share(self), share(other)])
    }

    /// Combine with `other` using OR
    fn or<O: Condition<C> + 'static>(self, other: O) -> ConditionGroup<C> {
        ConditionGroup::or(vec![share(self), share(other)])
    }

    /// Convert into a shared condition
    fn shared(self) -> SharedCondition<C> {
        share(self)
    }
}

impl<C: ?Sized, T: Condition<C> + 'static> ConditionExt<C> for T {}

/// A leaf with a fixed outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constant(pub bool);

/// Condition that always holds
pub fn always() -> Constant {
    Constant(true)
}

/// Condition that never holds
pub fn never() -> Constant {
    Constant(false)
}

impl<C: ?Sized> Condition<C> for Constant {
    fn evaluate(&self, _ctx: &C) -> Result<bool> {
        Ok(self.0)
    }
}

/// Negation of an inner condition
#[derive(Debug, Clone)]
pub struct Not<T>(pub T);

/// Invert `condition`
pub fn not<T>(condition: T) -> Not<T> {
    Not(condition)
}

impl<C: ?Sized, T: Condition<C>> Condition<C> for Not<T> {
    fn evaluate(&self, ctx: &C) -> Result<bool> {
        self.0.evaluate(ctx).map(|result| !result)
    }
}

/// Infallible closure-backed condition, see [`predicate`]
#[derive(Clone)]
pub struct Predicate<F>(F);

/// Build a condition from a closure returning `bool`
pub fn predicate<C: ?Sized, F>(f: F) -> Predicate<F>
where
    F: Fn(&C) -> bool,
{
    Predicate(f)
}

impl<C: ?Sized, F> Condition<C> for Predicate<F>
where
    F: Fn(&C) -> bool,
{
    fn evaluate(&self, ctx: &C) -> Result<bool> {
        Ok((self.0)(ctx))
    }
}

impl<F> fmt::Debug for Predicate<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Predicate")
    }
}

/// Fallible closure-backed condition, see [`condition_fn`]
#[derive(Clone)]
pub struct ConditionFn<F>(F);

/// Build a condition from a closure that may fail
pub fn condition_fn<C: ?Sized, F>(f: F) -> ConditionFn<F>
where
    F: Fn(&C) -> Result<bool>,
{
    ConditionFn(f)
}

impl<C: ?Sized, F> Condition<C> for ConditionFn<F>
where
    F: Fn(&C) -> Result<bool>,
{
    fn evaluate(&self, ctx: &C) -> Result<bool> {
        (self.0)(ctx)
    }
}

impl<F> fmt::Debug for ConditionFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ConditionFn")
    }
}
