//! Expression tree model for the opt rewrite toolkit.
//!
//! The whole algebra is unsigned integers under binary addition. A tree is
//! either a numeric leaf or an addition over two subtrees, and every node can
//! carry a binding name. The same representation doubles as the pattern
//! language of the rewrite engine: a leaf holding [`Numeric::Any`] is the
//! wildcard that stands for an arbitrary number.

pub mod display;
pub mod expression;

pub use expression::{Expr, ExprKind, Numeric};
