//! Records of individual rewrites.

use opt_ast::Expr;

/// One edge in a root-to-node path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathStep {
    Left,
    Right,
}

/// A single applied rewrite, kept for callers that want the trace.
#[derive(Debug, Clone)]
pub struct Step {
    /// `before -> after`, rendered for humans.
    pub description: String,
    /// Name of the transform that fired.
    pub rule_name: String,
    /// The matched subtree, rendered before the rewrite.
    pub before: String,
    /// The replacement subtree.
    pub after: String,
    /// Where in the whole tree the rewrite happened.
    pub path: Vec<PathStep>,
}

impl Step {
    pub fn new(rule_name: &str, before: &Expr, after: &Expr, path: Vec<PathStep>) -> Self {
        Self {
            description: format!("{} -> {}", before, after),
            rule_name: rule_name.to_string(),
            before: before.to_string(),
            after: after.to_string(),
            path,
        }
    }
}
