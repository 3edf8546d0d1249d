//! User session
//!
//! Drives one user's pass through the application: login, forced or
//! voluntary password change, and catalog browsing. Each UI event maps to
//! one method; results carry the exact message text the presentation layer
//! shows. A session owns its own navigator and store handles and is mutated
//! by exactly one caller at a time.

mod account;
mod browse;
mod results;

pub use results::{ActionResult, BrowseResult};

use crate::catalog::CatalogRow;
use crate::navigate::RecordNavigator;
use crate::store::{CatalogStore, CredentialStore, MemoryCatalog, MemoryCredentialStore};
use crate::validation::Outcome;

/// The screen a session is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    PasswordReset,
    Query,
}

/// One user's session over the credential and catalog stores.
pub struct Session<C: CatalogStore, U: CredentialStore> {
    catalog: C,
    credentials: U,
    navigator: RecordNavigator,
    screen: Screen,
}

impl Session<MemoryCatalog, MemoryCredentialStore> {
    /// Session wired to empty in-memory stores.
    pub fn in_memory() -> Self {
        Self::new(MemoryCatalog::default(), MemoryCredentialStore::new())
    }
}

impl<C: CatalogStore, U: CredentialStore> Session<C, U> {
    /// Starts a session on the login screen with nothing loaded.
    pub fn new(catalog: C, credentials: U) -> Self {
        Self {
            catalog,
            credentials,
            navigator: RecordNavigator::new(),
            screen: Screen::Login,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Row under the navigator's cursor, for re-display.
    pub fn current_record(&self) -> Option<&CatalogRow> {
        self.navigator.current()
    }

    /// Returns the session to the login screen without changing anything.
    pub fn exit_to_login(&mut self) {
        self.screen = Screen::Login;
    }

    fn action(&self, outcome: Outcome) -> ActionResult {
        ActionResult {
            ok: outcome.ok,
            message: outcome.message,
            screen: self.screen,
        }
    }
}
