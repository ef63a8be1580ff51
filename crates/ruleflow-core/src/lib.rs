//! Ruleflow Core - Condition trees and actions for ruleflow
//!
//! This crate provides the building blocks that rules are made of:
//! - Value types for comparison operands
//! - The `Condition` capability, comparison leaves and AND/OR groups
//! - The `Action` capability for side-effecting steps
//! - Error types

pub mod action;
pub mod condition;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use action::{action_fn, share_action, Action, ActionFn, SharedAction};
pub use condition::{
    always, condition_fn, never, not, predicate, share, Combinator, Comparison, Condition,
    ConditionExt, ConditionFn, ConditionGroup, Constant, Not, Operator, Predicate, SharedCondition,
};
pub use error::{Result, RuleError};
pub use types::Value;

/// Build an AND group from any number of conditions.
///
/// `and!()` with no arguments is always true.
#[macro_export]
macro_rules! and {
    ($($condition:expr),* $(,)?) => {
        $crate::condition::ConditionGroup::and(vec![$($crate::condition::share($condition)),*])
    };
}

/// Build an OR group from any number of conditions.
///
/// `or!()` with no arguments is always false.
#[macro_export]
macro_rules! or {
    ($($condition:expr),* $(,)?) => {
        $crate::condition::ConditionGroup::or(vec![$($crate::condition::share($condition)),*])
    };
}
