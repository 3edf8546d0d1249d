//! Error types
//!
//! Defines the typed error surface for the store collaborators. Validation
//! failures are not errors; they travel as outcome values with user-facing
//! messages.

use std::fmt;

/// Store collaborator errors.
///
/// "Not found" is never an error: lookups report absence as `Ok(None)` and
/// queries as an empty row set. These variants cover genuine transport and
/// query failures, which callers degrade to the matching "not found" message
/// after logging.
#[derive(Debug)]
pub enum StoreError {
    ConnectionFailed(String),
    QueryFailed(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::ConnectionFailed(msg) => write!(f, "Connection failed: {}", msg),
            StoreError::QueryFailed(msg) => write!(f, "Query failed: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}
