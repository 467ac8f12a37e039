//! Pattern instantiation and the single-transform rewrite pass.

use opt_ast::{Expr, Numeric};
use tracing::debug;

use crate::matcher::matches;
use crate::step::{PathStep, Step};
use crate::transform::Transform;

/// Collect every node of `root`, post-order, children before parents.
pub(crate) fn flatten_nodes<'a>(root: &'a Expr, out: &mut Vec<&'a Expr>) {
    if let Expr::Add { left, right, .. } = root {
        flatten_nodes(left, out);
        flatten_nodes(right, out);
    }
    out.push(root);
}

/// Collect every node's binding name in the same post-order.
///
/// Flattening a pattern with this and a matched subtree with
/// [`flatten_nodes`] yields two parallel sequences. Matching guarantees the
/// shapes agree, so the name at index `i` belongs to the node at index `i`.
pub(crate) fn flatten_bindings<'a>(root: &'a Expr, out: &mut Vec<Option<&'a str>>) {
    if let Expr::Add { left, right, .. } = root {
        flatten_bindings(left, out);
        flatten_bindings(right, out);
    }
    out.push(root.binding());
}

/// Build the template with each bound wildcard replaced by the numeric value
/// of the pattern-aligned subject node. The output carries no binding names.
fn instantiate(
    transform: &Transform,
    template: &Expr,
    names: &[Option<&str>],
    nodes: &[&Expr],
) -> Expr {
    match template {
        Expr::Add { left, right, .. } => Expr::add(
            instantiate(transform, left, names, nodes),
            instantiate(transform, right, names, nodes),
        ),
        Expr::Number {
            value: Numeric::Any,
            binding,
        } => {
            // Checked at construction; reaching one of these panics means
            // validation and instantiation disagree.
            let name = match binding.as_deref() {
                Some(name) => name,
                None => panic!(
                    "transform '{}': template wildcard has no binding name",
                    transform.name()
                ),
            };
            let index = match names.iter().position(|n| *n == Some(name)) {
                Some(index) => index,
                None => panic!(
                    "transform '{}': template binds '{}' but the pattern never names it",
                    transform.name(),
                    name
                ),
            };
            match nodes[index] {
                Expr::Number { value, .. } => Expr::number(*value),
                Expr::Add { .. } => panic!(
                    "transform '{}': binding '{}' names an addition node",
                    transform.name(),
                    name
                ),
            }
        }
        Expr::Number {
            value: Numeric::Value(v),
            ..
        } => Expr::num(*v),
    }
}

/// One transform applied over one subject tree in a single top-down pass.
///
/// Outermost match wins: when the pattern matches at a node the whole
/// subtree is replaced and the pass neither revisits the replacement nor
/// descends into the old children. Non-matching additions are rebuilt
/// around their rewritten children with binding names intact.
pub(crate) struct TransformPass<'a> {
    transform: &'a Transform,
    collect_steps: bool,
    pub(crate) steps: Vec<Step>,
    current_path: Vec<PathStep>,
}

impl<'a> TransformPass<'a> {
    pub(crate) fn new(transform: &'a Transform, collect_steps: bool) -> Self {
        Self {
            transform,
            collect_steps,
            steps: Vec::new(),
            current_path: Vec::new(),
        }
    }

    pub(crate) fn run(&mut self, subject: &Expr) -> Expr {
        if matches(self.transform.input_pattern(), subject) {
            let rewritten = self.apply_at(subject);
            debug!(
                target: "optimize",
                rule = self.transform.name(),
                path = ?self.current_path,
                "rewrote {} to {}",
                subject,
                rewritten
            );
            if self.collect_steps {
                self.steps.push(Step::new(
                    self.transform.name(),
                    subject,
                    &rewritten,
                    self.current_path.clone(),
                ));
            }
            return rewritten;
        }

        match subject {
            Expr::Add {
                left,
                right,
                binding,
            } => {
                self.current_path.push(PathStep::Left);
                let new_left = self.run(left);
                self.current_path.pop();

                self.current_path.push(PathStep::Right);
                let new_right = self.run(right);
                self.current_path.pop();

                match binding {
                    Some(name) => Expr::add_bound(new_left, new_right, name),
                    None => Expr::add(new_left, new_right),
                }
            }
            Expr::Number { .. } => subject.clone(),
        }
    }

    // Both flattened sequences live only for this one substitution.
    fn apply_at(&self, subject: &Expr) -> Expr {
        let mut pattern_names = Vec::new();
        flatten_bindings(self.transform.input_pattern(), &mut pattern_names);
        let mut subject_nodes = Vec::new();
        flatten_nodes(subject, &mut subject_nodes);
        instantiate(
            self.transform,
            self.transform.output_template(),
            &pattern_names,
            &subject_nodes,
        )
    }
}
