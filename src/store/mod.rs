//! Store collaborators
//!
//! Traits for the external credential and catalog lookups. The real backing
//! store is a relational database owned by the presentation layer's
//! deployment; the core only depends on these seams. An in-memory
//! implementation lives in [`memory`] for sessions and tests.

pub mod memory;

use crate::auth::CredentialRecord;
use crate::catalog::CatalogRow;
use crate::error::StoreError;

/// Lookup and replacement of stored credentials.
pub trait CredentialStore {
    /// Exact-match lookup by username. Absence is `Ok(None)`, never an error.
    fn find(&self, name: &str) -> Result<Option<CredentialRecord>, StoreError>;

    /// Replaces the stored password digest for `name`.
    ///
    /// Updating an unknown name is a no-op, matching an UPDATE that affects
    /// zero rows.
    fn update(&mut self, name: &str, new_digest: &str) -> Result<(), StoreError>;
}

/// Read-only whiskey catalog queries.
pub trait CatalogStore {
    /// All catalog rows in query order.
    fn find_all(&self) -> Result<Vec<CatalogRow>, StoreError>;

    /// Rows whose region matches exactly.
    fn find_by_region(&self, region: &str) -> Result<Vec<CatalogRow>, StoreError>;

    /// Rows whose age lies in `[lower, upper]`, bounds inclusive.
    fn find_by_age_range(&self, lower: u32, upper: u32) -> Result<Vec<CatalogRow>, StoreError>;
}

pub use memory::{MemoryCatalog, MemoryCredentialStore};
