//! Conditional dispatch of actions
//!
//! A [`Rule`] pairs one condition with two ordered action lists. Calling the
//! rule evaluates the condition once and runs every action of the selected
//! list, in order, with the same context. The free functions mirror the
//! usual shapes:
//!
//! - [`if_then`]: actions run when the condition holds
//! - [`if_not_then`]: actions run when it does not
//! - [`if_then_else`]: one list or the other
//!
//! [`run`] calls several prepared rules (or any handlers) against one shared
//! context in the order given.

use crate::event::Handler;
use ruleflow_core::{share, Action, Condition, Result, SharedAction, SharedCondition};
use std::fmt;
use std::rc::Rc;

/// A condition with the actions to run for each outcome
pub struct Rule<C: ?Sized> {
    name: Option<String>,
    condition: SharedCondition<C>,
    then_actions: Vec<SharedAction<C>>,
    else_actions: Vec<SharedAction<C>>,
}

impl<C: ?Sized> Rule<C> {
    /// Create a rule from a condition and both action lists
    pub fn new(
        condition: impl Condition<C> + 'static,
        then_actions: impl IntoIterator<Item = SharedAction<C>>,
        else_actions: impl IntoIterator<Item = SharedAction<C>>,
    ) -> Self {
        Self::from_shared(share(condition), then_actions, else_actions)
    }

    /// Create a rule around an already shared condition, without wrapping it again
    pub fn from_shared(
        condition: SharedCondition<C>,
        then_actions: impl IntoIterator<Item = SharedAction<C>>,
        else_actions: impl IntoIterator<Item = SharedAction<C>>,
    ) -> Self {
        Self {
            name: None,
            condition,
            then_actions: then_actions.into_iter().collect(),
            else_actions: else_actions.into_iter().collect(),
        }
    }

    /// Start building a rule guarded by `condition`
    pub fn when(condition: impl Condition<C> + 'static) -> RuleBuilder<C> {
        RuleBuilder::new(condition)
    }

    pub fn when_shared(condition: SharedCondition<C>) -> RuleBuilder<C> {
        RuleBuilder::from_shared(condition)
    }

    /// Set the name used in log output
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn condition(&self) -> &SharedCondition<C> {
        &self.condition
    }

    pub fn then_actions(&self) -> &[SharedAction<C>] {
        &self.then_actions
    }

    pub fn else_actions(&self) -> &[SharedAction<C>] {
        &self.else_actions
    }

    /// Evaluate the condition and run the selected actions
    ///
    /// A failing condition runs no action. A failing action stops the
    /// remaining actions of this call. Either error is returned unchanged.
    pub fn call(&self, ctx: &mut C) -> Result<()> {
        let matched = self.condition.evaluate(&*ctx)?;
        let (branch, actions) = if matched {
            ("then", &self.then_actions)
        } else {
            ("else", &self.else_actions)
        };

        tracing::debug!(
            rule = self.name.as_deref().unwrap_or("<unnamed>"),
            branch,
            actions = actions.len(),
            "rule condition evaluated"
        );

        for action in actions {
            action.run(ctx)?;
        }
        Ok(())
    }
}

impl<C: ?Sized> Handler<C> for Rule<C> {
    fn invoke(&self, args: &mut C) -> Result<()> {
        self.call(args)
    }
}

impl<C: ?Sized> Clone for Rule<C> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            condition: Rc::clone(&self.condition),
            then_actions: self.then_actions.clone(),
            else_actions: self.else_actions.clone(),
        }
    }
}

impl<C: ?Sized> fmt::Debug for Rule<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("then_actions", &self.then_actions.len())
            .field("else_actions", &self.else_actions.len())
            .finish()
    }
}

/// Builder for [`Rule`]
///
/// Either action list may be left empty.
pub struct RuleBuilder<C: ?Sized> {
    name: Option<String>,
    condition: SharedCondition<C>,
    then_actions: Vec<SharedAction<C>>,
    else_actions: Vec<SharedAction<C>>,
}

impl<C: ?Sized> RuleBuilder<C> {
    pub fn new(condition: impl Condition<C> + 'static) -> Self {
        Self::from_shared(share(condition))
    }

    pub fn from_shared(condition: SharedCondition<C>) -> Self {
        Self {
            name: None,
            condition,
            then_actions: Vec::new(),
            else_actions: Vec::new(),
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Append an action to run when the condition holds
    pub fn then(self, action: impl Action<C> + 'static) -> Self {
        self.then_shared(Rc::new(action))
    }

    pub fn then_shared(mut self, action: SharedAction<C>) -> Self {
        self.then_actions.push(action);
        self
    }

    /// Append an action to run when the condition does not hold
    pub fn otherwise(self, action: impl Action<C> + 'static) -> Self {
        self.otherwise_shared(Rc::new(action))
    }

    pub fn otherwise_shared(mut self, action: SharedAction<C>) -> Self {
        self.else_actions.push(action);
        self
    }

    pub fn build(self) -> Rule<C> {
        Rule {
            name: self.name,
            condition: self.condition,
            then_actions: self.then_actions,
            else_actions: self.else_actions,
        }
    }
}

/// Run `then_actions` when `condition` holds, `else_actions` otherwise
pub fn if_then_else<C: ?Sized>(
    condition: impl Condition<C> + 'static,
    then_actions: impl IntoIterator<Item = SharedAction<C>>,
    else_actions: impl IntoIterator<Item = SharedAction<C>>,
) -> Rule<C> {
    Rule::new(condition, then_actions, else_actions)
}

/// Run `actions` when `condition` holds
pub fn if_then<C: ?Sized>(
    condition: impl Condition<C> + 'static,
    actions: impl IntoIterator<Item = SharedAction<C>>,
) -> Rule<C> {
    Rule::new(condition, actions, Vec::new())
}

/// Run `actions` when `condition` does not hold
pub fn if_not_then<C: ?Sized>(
    condition: impl Condition<C> + 'static,
    actions: impl IntoIterator<Item = SharedAction<C>>,
) -> Rule<C> {
    Rule::new(condition, Vec::new(), actions)
}

/// Invoke each rule against `ctx` in the order given
///
/// Stops at the first error.
pub fn run<C: ?Sized>(ctx: &mut C, rules: &[&dyn Handler<C>]) -> Result<()> {
    for rule in rules {
        rule.invoke(ctx)?;
    }
    Ok(())
}
