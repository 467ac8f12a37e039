//! Additive identity elimination.

use opt_ast::Expr;

use crate::optimizer::Optimizer;
use crate::transform::Transform;

/// `0 + x` rewrites to `x`.
pub fn add_zero_left() -> Transform {
    Transform::new(
        "Left Zero Elimination",
        Expr::add(Expr::num(0), Expr::any_bound("right")),
        Expr::any_bound("right"),
    )
    .expect("built-in transform is well formed")
}

/// `x + 0` rewrites to `x`.
pub fn add_zero_right() -> Transform {
    Transform::new(
        "Right Zero Elimination",
        Expr::add(Expr::any_bound("left"), Expr::num(0)),
        Expr::any_bound("left"),
    )
    .expect("built-in transform is well formed")
}

/// Register the built-ins. Each one runs exactly one pass, in this order.
pub fn register(optimizer: &mut Optimizer) {
    optimizer.add_transform(add_zero_left());
    optimizer.add_transform(add_zero_right());
}
