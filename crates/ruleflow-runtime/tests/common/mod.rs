//! Common fixtures for runtime integration tests

#![allow(dead_code)]

use ruleflow_core::{Action, Result};
use std::cell::Cell;

/// Action that counts its own runs
#[derive(Debug, Default)]
pub struct IncrementCounter {
    counter: Cell<i32>,
}

impl IncrementCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> i32 {
        self.counter.get()
    }
}

impl<C: ?Sized> Action<C> for IncrementCounter {
    fn run(&self, _ctx: &mut C) -> Result<()> {
        self.counter.set(self.counter.get() + 1);
        Ok(())
    }
}

/// Subject whose counter rules adjust
#[derive(Debug)]
pub struct Subject {
    pub identifier: String,
    pub counter: i32,
}

impl Subject {
    pub fn new(identifier: &str) -> Self {
        Self {
            identifier: identifier.to_string(),
            counter: 0,
        }
    }
}

#[derive(Debug)]
pub struct User {
    pub username: String,
}

impl User {
    pub fn new(username: &str) -> Self {
        Self {
            username: username.to_string(),
        }
    }
}

/// Context rules are evaluated against
#[derive(Debug)]
pub struct EvaluationContext {
    pub subject: Subject,
    pub user: User,
}

impl EvaluationContext {
    pub fn new(subject: Subject, user: User) -> Self {
        Self { subject, user }
    }
}
