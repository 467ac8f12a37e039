//! Engine error types.

use thiserror::Error;

/// Rejections raised while building a [`Transform`](crate::Transform).
///
/// Every variant describes a template that instantiation could not honor, so
/// a constructed transform never fails to instantiate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    #[error("input pattern binds '{0}' more than once")]
    DuplicateBinding(String),

    #[error("output template has a wildcard with no binding name")]
    UnnamedPlaceholder,

    #[error("output template binds '{0}' but the input pattern never names it")]
    UnknownBinding(String),

    #[error("binding '{0}' names an addition node; only a numeric node can fill a template wildcard")]
    NonNumericBinding(String),
}
