//! Integration tests for condition trees
//!
//! Exercises comparison leaves, AND/OR groups, infix combinators and
//! context-aware predicates together.

use ruleflow_core::condition;
use ruleflow_core::{
    and, condition_fn, never, not, or, predicate, share, Comparison, Condition, ConditionExt,
    RuleError, SharedCondition,
};
use std::cell::Cell;
use std::rc::Rc;

// =============================================================================
// Leaves
// =============================================================================

#[test]
fn test_simple_evaluation() {
    assert!(Comparison::equals(1, 1).evaluate(&()).unwrap());
    assert!(!Comparison::not_equals(1, 1).evaluate(&()).unwrap());
}

#[test]
fn test_unsupported_operator_tag() {
    let err = Comparison::parse("=~", "a", "a").unwrap_err();
    assert!(matches!(err, RuleError::UnsupportedOperator(ref tag) if tag == "=~"));
}

// =============================================================================
// Groups
// =============================================================================

#[test]
fn test_and_of_mixed_leaves() {
    let condition = and!(
        Comparison::equals(1, 1),
        Comparison::equals("a", "a"),
        Comparison::not_equals(100, 101),
        Comparison::not_equals("a", "b"),
    );
    assert!(condition.evaluate(&()).unwrap());
}

#[test]
fn test_or_logic_in_either_position() {
    let first = or!(Comparison::equals(1, 1), Comparison::equals(1, 2));
    let second = or!(Comparison::equals(1, 2), Comparison::equals(1, 1));
    assert!(first.evaluate(&()).unwrap());
    assert!(second.evaluate(&()).unwrap());
}

#[test]
fn test_nested_groups() {
    let both = and!(Comparison::equals("abc", "abc"), Comparison::equals(1, 1));
    let condition = or!(Comparison::equals("abc", 12345), both);
    assert!(condition.evaluate(&()).unwrap());
}

#[test]
fn test_combined_logic() {
    let nested = or!(Comparison::equals(1, "a"), Comparison::equals(1, 1));
    let condition = and!(
        nested,
        Comparison::equals("a", "a"),
        Comparison::equals(1, 1)
    );
    assert!(condition.evaluate(&()).unwrap());
}

#[test]
fn test_empty_macros() {
    let empty_and = and!();
    let empty_or = or!();
    assert!(empty_and.evaluate(&()).unwrap());
    assert!(!empty_or.evaluate(&()).unwrap());
}

// =============================================================================
// Infix combinators
// =============================================================================

#[test]
fn test_shorthand_and_logic() {
    let a = Comparison::equals("", "");
    let b = Comparison::equals(42, 42);

    assert!(a.clone().and(b.clone()).evaluate(&()).unwrap());
    assert!(a.or(b).evaluate(&()).unwrap());
}

#[test]
fn test_shorthand_or_logic() {
    let a = Comparison::equals("", "");
    let b = Comparison::equals("", 42);

    assert!(a.clone().or(b.clone()).evaluate(&()).unwrap());
    assert!(!a.and(b).evaluate(&()).unwrap());
}

#[test]
fn test_infix_equivalent_to_macro() {
    let cases = [(true, true), (true, false), (false, true), (false, false)];
    for (a, b) in cases {
        let lhs = Comparison::equals(a, true);
        let rhs = Comparison::equals(b, true);
        assert_eq!(
            lhs.clone().and(rhs.clone()).evaluate(&()).unwrap(),
            and!(lhs.clone(), rhs.clone()).evaluate(&()).unwrap()
        );
        assert_eq!(
            lhs.clone().or(rhs.clone()).evaluate(&()).unwrap(),
            or!(lhs, rhs).evaluate(&()).unwrap()
        );
    }
}

// =============================================================================
// Context-aware leaves
// =============================================================================

struct Order {
    amount: f64,
    country: &'static str,
}

fn order(amount: f64, country: &'static str) -> Order {
    Order { amount, country }
}

#[test]
fn test_predicates_over_context() {
    let large = predicate(|order: &Order| order.amount > 1000.0);
    let domestic = predicate(|order: &Order| order.country == "US");
    let review = large.and(not(domestic));

    assert!(review.evaluate(&order(1500.0, "DE")).unwrap());
    assert!(!review.evaluate(&order(1500.0, "US")).unwrap());
    assert!(!review.evaluate(&order(10.0, "DE")).unwrap());
}

#[test]
fn test_shared_leaf_is_evaluated_per_use() {
    let calls = Rc::new(Cell::new(0));
    let counted: SharedCondition<()> = {
        let calls = Rc::clone(&calls);
        share(predicate(move |_: &()| {
            calls.set(calls.get() + 1);
            true
        }))
    };

    let condition = condition::and(vec![
        counted.clone(),
        counted.clone(),
        share(never()),
        counted,
    ]);
    assert!(!condition.evaluate(&()).unwrap());
    assert_eq!(calls.get(), 2);
}

#[test]
fn test_leaf_error_reaches_caller() {
    let failing = condition_fn(|_: &()| Err(anyhow::anyhow!("lookup failed").into()));
    let condition = or!(never(), failing, Comparison::equals(1, 1));

    let err = condition.evaluate(&()).unwrap_err();
    assert_eq!(err.to_string(), "lookup failed");
}
