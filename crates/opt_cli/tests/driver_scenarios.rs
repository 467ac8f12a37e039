//! The two demo scenarios, asserted end to end against the default rules.
//!
//! Run with logs: RUST_LOG=optimize=debug cargo test -p opt_cli -- --nocapture

use opt_ast::{Expr, ExprKind};
use opt_engine::Optimizer;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

#[test]
fn test_left_zero_scenario() {
    init_tracing();
    let input = Expr::add(Expr::num(0), Expr::num(1));
    let optimizer = Optimizer::with_default_rules();
    let (optimized, steps) = optimizer.optimize_with_steps(&input);

    assert_eq!(optimized.kind(), ExprKind::Number);
    assert_eq!(optimized.as_number(), Some(1));
    assert_eq!(optimized.evaluate(), input.evaluate());
    assert_eq!(steps.len(), 1);
    assert_eq!(steps[0].rule_name, "Left Zero Elimination");
}

#[test]
fn test_right_zero_scenario() {
    init_tracing();
    let input = Expr::add(Expr::num(1), Expr::num(0));
    let optimizer = Optimizer::with_default_rules();
    let (optimized, steps) = optimizer.optimize_with_steps(&input);

    assert_eq!(optimized.kind(), ExprKind::Number);
    assert_eq!(optimized.as_number(), Some(1));
    assert_eq!(optimized.evaluate(), input.evaluate());
    assert_eq!(steps.len(), 1);
    assert_eq!(steps[0].rule_name, "Right Zero Elimination");
}
