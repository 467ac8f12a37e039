//! Human-readable rendering of expression trees.
//!
//! Additions print infix, nested additions get parentheses, the wildcard
//! prints as `any`, and a binding name prints as an `@name` suffix on its
//! node.

use std::fmt;

use crate::expression::{Expr, Numeric};

impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Numeric::Value(v) => write!(f, "{}", v),
            Numeric::Any => write!(f, "any"),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number { value, binding } => {
                write!(f, "{}", value)?;
                if let Some(name) = binding {
                    write!(f, "@{}", name)?;
                }
                Ok(())
            }
            Expr::Add {
                left,
                right,
                binding,
            } => {
                if binding.is_some() {
                    write!(f, "(")?;
                }
                write_child(f, left)?;
                write!(f, " + ")?;
                write_child(f, right)?;
                if let Some(name) = binding {
                    write!(f, ")@{}", name)?;
                }
                Ok(())
            }
        }
    }
}

// A bound addition child already wraps itself in parentheses.
fn write_child(f: &mut fmt::Formatter<'_>, child: &Expr) -> fmt::Result {
    match child {
        Expr::Add { binding: None, .. } => write!(f, "({})", child),
        Expr::Add { .. } | Expr::Number { .. } => write!(f, "{}", child),
    }
}
