//! Error handling
//!
//! Defines error types for the store collaborators.

pub mod types;

pub use types::*;
