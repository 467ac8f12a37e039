//! Caller-defined transforms exercised through the public surface.

use opt_ast::Expr;
use opt_engine::{Optimizer, Transform, TransformError};

fn swap_rule() -> Transform {
    Transform::new(
        "swap operands",
        Expr::add(Expr::any_bound("a"), Expr::any_bound("b")),
        Expr::add(Expr::any_bound("b"), Expr::any_bound("a")),
    )
    .unwrap()
}

#[test]
fn test_swap_rule_reorders_leaf_operands() {
    let mut optimizer = Optimizer::new();
    optimizer.add_transform(swap_rule());

    let input = Expr::add(Expr::num(1), Expr::num(2));
    let optimized = optimizer.optimize(&input);
    assert_eq!(optimized, Expr::add(Expr::num(2), Expr::num(1)));
}

#[test]
fn test_swap_rule_fires_at_the_innermost_leaf_pair() {
    // Wildcards only bind numbers, so the root (whose left child is an
    // addition) cannot match; the inner pair swaps instead.
    let mut optimizer = Optimizer::new();
    optimizer.add_transform(swap_rule());

    let input = Expr::add(Expr::add(Expr::num(1), Expr::num(2)), Expr::num(3));
    let optimized = optimizer.optimize(&input);
    assert_eq!(
        optimized,
        Expr::add(Expr::add(Expr::num(2), Expr::num(1)), Expr::num(3))
    );
}

#[test]
fn test_template_may_reuse_a_binding() {
    let double = Transform::new(
        "double",
        Expr::any_bound("n"),
        Expr::add(Expr::any_bound("n"), Expr::any_bound("n")),
    )
    .unwrap();
    let mut optimizer = Optimizer::new();
    optimizer.add_transform(double);

    let optimized = optimizer.optimize(&Expr::num(5));
    assert_eq!(optimized, Expr::add(Expr::num(5), Expr::num(5)));
    assert_eq!(optimized.evaluate(), 10);
}

#[test]
fn test_literal_template_replaces_match_wholesale() {
    let absorb = Transform::new(
        "absorb",
        Expr::add(Expr::num(7), Expr::any_bound("x")),
        Expr::num(7),
    )
    .unwrap();
    let mut optimizer = Optimizer::new();
    optimizer.add_transform(absorb);

    let input = Expr::add(Expr::num(3), Expr::add(Expr::num(7), Expr::num(9)));
    let optimized = optimizer.optimize(&input);
    assert_eq!(optimized, Expr::add(Expr::num(3), Expr::num(7)));
}

#[test]
fn test_malformed_transform_is_rejected_up_front() {
    let err = Transform::new(
        "bad",
        Expr::add(Expr::any_bound("a"), Expr::any_bound("a")),
        Expr::any_bound("a"),
    )
    .unwrap_err();
    assert_eq!(err, TransformError::DuplicateBinding("a".to_string()));
}
