//! Comparison leaf condition

use super::operator::Operator;
use super::Condition;
use crate::error::{Result, RuleError};
use crate::types::Value;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A leaf that compares two held operands
///
/// The operands are fixed at construction, so the outcome does not depend on
/// the context the leaf is evaluated with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub operator: Operator,
    pub lhs: Value,
    pub rhs: Value,
}

impl Comparison {
    /// Create a comparison
    pub fn new(operator: Operator, lhs: impl Into<Value>, rhs: impl Into<Value>) -> Self {
        Self {
            operator,
            lhs: lhs.into(),
            rhs: rhs.into(),
        }
    }

    /// Create a comparison from an operator tag such as `"=="`
    pub fn parse(tag: &str, lhs: impl Into<Value>, rhs: impl Into<Value>) -> Result<Self> {
        Ok(Self::new(tag.parse()?, lhs, rhs))
    }

    pub fn equals(lhs: impl Into<Value>, rhs: impl Into<Value>) -> Self {
        Self::new(Operator::Eq, lhs, rhs)
    }

    pub fn not_equals(lhs: impl Into<Value>, rhs: impl Into<Value>) -> Self {
        Self::new(Operator::Ne, lhs, rhs)
    }

    pub fn greater_than(lhs: impl Into<Value>, rhs: impl Into<Value>) -> Self {
        Self::new(Operator::Gt, lhs, rhs)
    }

    pub fn greater_or_equal(lhs: impl Into<Value>, rhs: impl Into<Value>) -> Self {
        Self::new(Operator::Ge, lhs, rhs)
    }

    pub fn less_than(lhs: impl Into<Value>, rhs: impl Into<Value>) -> Self {
        Self::new(Operator::Lt, lhs, rhs)
    }

    pub fn less_or_equal(lhs: impl Into<Value>, rhs: impl Into<Value>) -> Self {
        Self::new(Operator::Le, lhs, rhs)
    }

    /// Apply the operator to the held operands
    pub fn compare(&self) -> Result<bool> {
        let result = match self.operator {
            Operator::Eq => self.lhs == self.rhs,
            Operator::Ne => self.lhs != self.rhs,
            Operator::Gt => self.ordering()? == Some(Ordering::Greater),
            Operator::Ge => matches!(self.ordering()?, Some(Ordering::Greater | Ordering::Equal)),
            Operator::Lt => self.ordering()? == Some(Ordering::Less),
            Operator::Le => matches!(self.ordering()?, Some(Ordering::Less | Ordering::Equal)),
        };

        log::trace!("{} {} {} => {}", self.lhs, self.operator, self.rhs, result);
        Ok(result)
    }

    /// Ordering of the operands, `None` when a null makes them incomparable
    fn ordering(&self) -> Result<Option<Ordering>> {
        match (&self.lhs, &self.rhs) {
            (Value::Null, _) | (_, Value::Null) => Ok(None),
            (Value::Integer(_) | Value::Number(_), Value::Integer(_) | Value::Number(_)) => {
                Ok(self.lhs.numeric_cmp(&self.rhs))
            }
            (Value::String(l), Value::String(r)) => Ok(Some(l.cmp(r))),
            (l, r) => Err(RuleError::InvalidOperation(format!(
                "Cannot compare {} and {} with {}",
                l.type_name(),
                r.type_name(),
                self.operator
            ))),
        }
    }
}

impl<C: ?Sized> Condition<C> for Comparison {
    fn evaluate(&self, _ctx: &C) -> Result<bool> {
        self.compare()
    }
}
