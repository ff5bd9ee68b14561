use super::record::{IdentityKey, ProductRecord};
use std::collections::HashSet;

/// Insertion-ordered collection of unique product records
///
/// Records are only ever appended. A candidate whose identity key is already
/// present is rejected, so the first record seen for a product wins.
#[derive(Debug, Default)]
pub struct Catalog {
    records: Vec<ProductRecord>,
    keys: HashSet<IdentityKey>,
}

impl Catalog {
    /// Creates an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a candidate unless a record with the same identity key exists
    ///
    /// # Returns
    ///
    /// `true` if the candidate was stored, `false` if it was a duplicate
    pub fn try_insert(&mut self, candidate: ProductRecord) -> bool {
        if !self.keys.insert(candidate.identity_key()) {
            return false;
        }

        self.records.push(candidate);
        true
    }

    /// Records in insertion order
    pub fn records(&self) -> &[ProductRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Consumes the catalog, returning its records in insertion order
    pub fn into_records(self) -> Vec<ProductRecord> {
        self.records
    }
}
