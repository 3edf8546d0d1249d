//! Result types for session operations
//!
//! Plain structs the presentation layer renders: a message, the screen to
//! show, and optionally a row for the display fields.

use super::Screen;
use crate::catalog::CatalogRow;

/// Result of a login or password-change action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResult {
    pub ok: bool,
    pub message: String,
    /// Screen the session is on after the action.
    pub screen: Screen,
}

/// Result of a catalog browse action.
///
/// `row: None` tells the caller to clear the record display fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseResult {
    pub row: Option<CatalogRow>,
    pub message: String,
}

impl BrowseResult {
    pub(crate) fn message_only(message: &str) -> Self {
        Self {
            row: None,
            message: message.to_string(),
        }
    }
}
