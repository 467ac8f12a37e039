//! Ordered application of transforms over whole trees.

use opt_ast::Expr;
use tracing::debug;

use crate::rewrite::TransformPass;
use crate::step::Step;
use crate::transform::Transform;

/// Runs an ordered list of [`Transform`]s, one single pass each.
///
/// Order is the whole strategy: every transform gets exactly one top-down
/// pass over the current tree, in registration order, and nothing loops to a
/// fixpoint. An opportunity a later transform creates for an earlier one is
/// left for the caller's next [`optimize`](Optimizer::optimize) call.
pub struct Optimizer {
    transforms: Vec<Transform>,
}

impl Optimizer {
    /// An optimizer with no transforms registered.
    pub fn new() -> Self {
        Self {
            transforms: Vec::new(),
        }
    }

    /// An optimizer preloaded with the built-in arithmetic rules.
    pub fn with_default_rules() -> Self {
        let mut optimizer = Self::new();
        crate::rules::arithmetic::register(&mut optimizer);
        optimizer
    }

    /// Append a transform. Registration order is application order.
    pub fn add_transform(&mut self, transform: Transform) {
        self.transforms.push(transform);
    }

    /// The registered transforms in application order.
    pub fn transforms(&self) -> &[Transform] {
        &self.transforms
    }

    /// Rewrite `root` with every registered transform.
    ///
    /// Returns a new, independently owned tree; the input is never touched.
    pub fn optimize(&self, root: &Expr) -> Expr {
        self.run(root, false).0
    }

    /// Like [`optimize`](Self::optimize), also returning the applied
    /// rewrites in application order.
    pub fn optimize_with_steps(&self, root: &Expr) -> (Expr, Vec<Step>) {
        self.run(root, true)
    }

    fn run(&self, root: &Expr, collect_steps: bool) -> (Expr, Vec<Step>) {
        let mut current = root.clone();
        let mut steps = Vec::new();
        for transform in &self.transforms {
            debug!(target: "optimize", rule = transform.name(), "pass start");
            let mut pass = TransformPass::new(transform, collect_steps);
            current = pass.run(&current);
            steps.append(&mut pass.steps);
        }
        (current, steps)
    }
}

impl Default for Optimizer {
    fn default() -> Self {
        Self::new()
    }
}
