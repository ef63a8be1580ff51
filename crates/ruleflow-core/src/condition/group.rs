//! AND/OR condition groups

use super::{Condition, SharedCondition};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a group combines its children
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Combinator {
    /// Every child must hold
    And,
    /// At least one child must hold
    Or,
}

impl Combinator {
    /// Outcome of a group whose children never decided it (including an empty group)
    pub fn identity(&self) -> bool {
        match self {
            Combinator::And => true,
            Combinator::Or => false,
        }
    }

    /// Child result that decides the group on its own
    fn deciding(&self) -> bool {
        !self.identity()
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Combinator::And => f.write_str("AND"),
            Combinator::Or => f.write_str("OR"),
        }
    }
}

/// An ordered list of child conditions combined with AND or OR
///
/// Children are evaluated in order and evaluation stops at the first child
/// that decides the outcome. An empty AND group is true, an empty OR group
/// is false.
pub struct ConditionGroup<C: ?Sized> {
    combinator: Combinator,
    conditions: Vec<SharedCondition<C>>,
}

impl<C: ?Sized> ConditionGroup<C> {
    /// Create a group
    pub fn new(
        combinator: Combinator,
        conditions: impl IntoIterator<Item = SharedCondition<C>>,
    ) -> Self {
        Self {
            combinator,
            conditions: conditions.into_iter().collect(),
        }
    }

    /// Create an AND group
    pub fn and(conditions: impl IntoIterator<Item = SharedCondition<C>>) -> Self {
        Self::new(Combinator::And, conditions)
    }

    /// Create an OR group
    pub fn or(conditions: impl IntoIterator<Item = SharedCondition<C>>) -> Self {
        Self::new(Combinator::Or, conditions)
    }

    pub fn combinator(&self) -> Combinator {
        self.combinator
    }

    pub fn conditions(&self) -> &[SharedCondition<C>] {
        &self.conditions
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}

/// Create an AND group
pub fn and<C: ?Sized>(
    conditions: impl IntoIterator<Item = SharedCondition<C>>,
) -> ConditionGroup<C> {
    ConditionGroup::and(conditions)
}

/// Create an OR group
pub fn or<C: ?Sized>(
    conditions: impl IntoIterator<Item = SharedCondition<C>>,
) -> ConditionGroup<C> {
    ConditionGroup::or(conditions)
}

impl<C: ?Sized> Condition<C> for ConditionGroup<C> {
    fn evaluate(&self, ctx: &C) -> Result<bool> {
        let deciding = self.combinator.deciding();

        for (index, condition) in self.conditions.iter().enumerate() {
            if condition.evaluate(ctx)? == deciding {
                log::trace!(
                    "{} group decided by child {} of {}",
                    self.combinator,
                    index,
                    self.conditions.len()
                );
                return Ok(deciding);
            }
        }

        Ok(self.combinator.identity())
    }
}

impl<C: ?Sized> Clone for ConditionGroup<C> {
    fn clone(&self) -> Self {
        Self {
            combinator: self.combinator,
            conditions: self.conditions.clone(),
        }
    }
}

impl<C: ?Sized> fmt::Debug for ConditionGroup<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConditionGroup")
            .field("combinator", &self.combinator)
            .field("conditions", &self.conditions.len())
            .finish()
    }
}
