//! Rewrite rule definition: an input pattern paired with an output template.

use opt_ast::{Expr, ExprKind, Numeric};

use crate::error::TransformError;
use crate::rewrite::{flatten_bindings, flatten_nodes};

/// A named rewrite rule.
///
/// The input pattern decides where the rule fires; the output template says
/// what to build there. Every wildcard in the template must name a binding
/// the input pattern attaches to a numeric node. That is checked once at
/// construction, so instantiation can rely on it.
#[derive(Debug, Clone)]
pub struct Transform {
    name: String,
    input: Expr,
    output: Expr,
}

impl Transform {
    /// Build a transform, validating the template against the pattern.
    pub fn new(name: &str, input: Expr, output: Expr) -> Result<Self, TransformError> {
        validate(&input, &output)?;
        Ok(Self {
            name: name.to_string(),
            input,
            output,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The pattern a subject subtree must match for the rule to fire.
    pub fn input_pattern(&self) -> &Expr {
        &self.input
    }

    /// The template instantiated in place of a matched subtree.
    pub fn output_template(&self) -> &Expr {
        &self.output
    }
}

fn validate(input: &Expr, output: &Expr) -> Result<(), TransformError> {
    let mut names = Vec::new();
    flatten_bindings(input, &mut names);

    for (i, name) in names.iter().enumerate() {
        if let Some(name) = name {
            if names[..i].contains(&Some(*name)) {
                return Err(TransformError::DuplicateBinding(name.to_string()));
            }
        }
    }

    let mut nodes = Vec::new();
    flatten_nodes(input, &mut nodes);
    check_template(output, &names, &nodes)
}

// Every bound template wildcard must resolve to a numeric pattern node.
fn check_template(
    template: &Expr,
    names: &[Option<&str>],
    nodes: &[&Expr],
) -> Result<(), TransformError> {
    match template {
        Expr::Add { left, right, .. } => {
            check_template(left, names, nodes)?;
            check_template(right, names, nodes)
        }
        Expr::Number {
            value: Numeric::Any,
            binding,
        } => {
            let name = binding
                .as_deref()
                .ok_or(TransformError::UnnamedPlaceholder)?;
            let index = names
                .iter()
                .position(|n| *n == Some(name))
                .ok_or_else(|| TransformError::UnknownBinding(name.to_string()))?;
            match nodes[index].kind() {
                ExprKind::Number => Ok(()),
                ExprKind::Add => Err(TransformError::NonNumericBinding(name.to_string())),
            }
        }
        Expr::Number { .. } => Ok(()),
    }
}
