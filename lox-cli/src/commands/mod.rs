//! CLI command implementations.

pub mod tokenize;
