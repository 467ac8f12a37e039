//! Ordered pattern rewriting over opt expression trees.
//!
//! A [`Transform`] pairs an input pattern with an output template. The
//! [`Optimizer`] holds an ordered list of transforms and gives each one a
//! single top-down pass over the subject tree. When a pattern matches, the
//! whole matched subtree is replaced by the instantiated template and the
//! pass moves on without revisiting the replacement. Nothing iterates to a
//! fixpoint; an opportunity one transform creates for an earlier one is left
//! for the caller's next `optimize` call.

pub mod error;
pub mod matcher;
pub mod optimizer;
pub mod rules;
pub mod step;
pub mod transform;

mod rewrite;

pub use error::TransformError;
pub use matcher::matches;
pub use optimizer::Optimizer;
pub use step::{PathStep, Step};
pub use transform::Transform;
