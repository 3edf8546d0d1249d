//! In-memory stores
//!
//! Map- and vector-backed implementations of the store traits. These stand
//! in for the relational collaborators in tests and single-process use;
//! in production these would be a proper database.

use std::collections::HashMap;

use super::{CatalogStore, CredentialStore};
use crate::auth::{CredentialRecord, StoredPassword};
use crate::catalog::CatalogRow;
use crate::error::StoreError;

/// Credential store backed by a map from username to stored password.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    records: HashMap<String, StoredPassword>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces an account from its raw stored password value.
    pub fn insert(&mut self, name: &str, stored_password: &str) {
        self.records
            .insert(name.to_string(), StoredPassword::from_stored(stored_password));
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn find(&self, name: &str) -> Result<Option<CredentialRecord>, StoreError> {
        Ok(self.records.get(name).map(|password| CredentialRecord {
            name: name.to_string(),
            password: password.clone(),
        }))
    }

    fn update(&mut self, name: &str, new_digest: &str) -> Result<(), StoreError> {
        if let Some(password) = self.records.get_mut(name) {
            *password = StoredPassword::Hashed(new_digest.to_string());
        }
        Ok(())
    }
}

/// Catalog store backed by a vector of rows in insertion order.
#[derive(Debug, Default)]
pub struct MemoryCatalog {
    rows: Vec<CatalogRow>,
}

impl MemoryCatalog {
    pub fn new(rows: Vec<CatalogRow>) -> Self {
        Self { rows }
    }
}

impl CatalogStore for MemoryCatalog {
    fn find_all(&self) -> Result<Vec<CatalogRow>, StoreError> {
        Ok(self.rows.clone())
    }

    fn find_by_region(&self, region: &str) -> Result<Vec<CatalogRow>, StoreError> {
        Ok(self
            .rows
            .iter()
            .filter(|row| row.region == region)
            .cloned()
            .collect())
    }

    fn find_by_age_range(&self, lower: u32, upper: u32) -> Result<Vec<CatalogRow>, StoreError> {
        Ok(self
            .rows
            .iter()
            .filter(|row| row.age >= lower && row.age <= upper)
            .cloned()
            .collect())
    }
}
