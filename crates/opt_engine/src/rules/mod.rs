//! Built-in transform definitions.

pub mod arithmetic;
