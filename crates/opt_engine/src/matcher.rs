//! Structural pattern matching.

use opt_ast::{Expr, Numeric};

/// Whether `pattern` structurally matches `query`.
///
/// Two numeric leaves match when their values agree or either side is the
/// wildcard. Two additions match when both child pairs match, left against
/// left and right against right. Binding names never influence the outcome.
/// Mixed node kinds never match, so a wildcard stands for one numeric leaf,
/// not an arbitrary subtree.
pub fn matches(pattern: &Expr, query: &Expr) -> bool {
    match (pattern, query) {
        (Expr::Number { value: p, .. }, Expr::Number { value: q, .. }) => match (p, q) {
            (Numeric::Value(a), Numeric::Value(b)) => a == b,
            // At least one side is the wildcard.
            _ => true,
        },
        (
            Expr::Add {
                left: pl,
                right: pr,
                ..
            },
            Expr::Add {
                left: ql,
                right: qr,
                ..
            },
        ) => matches(pl, ql) && matches(pr, qr),
        (Expr::Number { .. }, Expr::Add { .. }) | (Expr::Add { .. }, Expr::Number { .. }) => false,
    }
}
