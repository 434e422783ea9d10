//! Run configuration for a pack build.
//!
//! The CLI resolves its flags into a [`PackConfig`], which is then handed to
//! every pipeline stage explicitly.

pub mod models;

pub use models::*;

#[cfg(test)]
#[path = "tests/models_tests.rs"]
mod models_tests;
