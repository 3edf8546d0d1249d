//! Catalog records
//!
//! Defines the whiskey record type returned by catalog queries and
//! cached by the record navigator.

use serde::{Deserialize, Serialize};

/// A single whiskey record as returned from the catalog store.
///
/// Rows are plain values: they carry no identity beyond their fields,
/// duplicates are legal, and a row is never mutated once queried.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogRow {
    pub distillery: String,
    pub age: u32,
    pub region: String,
    pub price: u32,
}

impl CatalogRow {
    pub fn new(distillery: &str, age: u32, region: &str, price: u32) -> Self {
        Self {
            distillery: distillery.to_string(),
            age,
            region: region.to_string(),
            price,
        }
    }
}
