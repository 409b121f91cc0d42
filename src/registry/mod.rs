//! Read-only product registry
//!
//! The verifier only ever needs a point lookup by integer id, so the
//! registry surface is a single method. Backends:
//! - [`MemoryRegistry`] keeps rows in a `HashMap`
//! - [`JsonRegistry`] loads the `products` table from a JSON file

pub mod json;

pub use json::JsonRegistry;

use crate::error::RegistryError;
use crate::models::ProductRecord;
use std::collections::HashMap;

/// Point lookup of product records by primary key
pub trait ProductRegistry {
    /// Fetch a product by id
    ///
    /// `Ok(None)` means the lookup ran and found no row. `Err` means the
    /// lookup could not run at all.
    fn get_product(&self, id: i64) -> Result<Option<ProductRecord>, RegistryError>;
}

impl<R: ProductRegistry + ?Sized> ProductRegistry for &R {
    fn get_product(&self, id: i64) -> Result<Option<ProductRecord>, RegistryError> {
        (**self).get_product(id)
    }
}

impl<R: ProductRegistry + ?Sized> ProductRegistry for Box<R> {
    fn get_product(&self, id: i64) -> Result<Option<ProductRecord>, RegistryError> {
        (**self).get_product(id)
    }
}

/// In-memory registry
#[derive(Debug, Clone, Default)]
pub struct MemoryRegistry {
    rows: HashMap<i64, ProductRecord>,
}

impl MemoryRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from rows; duplicate ids are rejected
    pub fn from_records<I>(records: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = ProductRecord>,
    {
        let mut registry = Self::new();
        for record in records {
            if registry.rows.contains_key(&record.id) {
                return Err(RegistryError::DuplicateId(record.id));
            }
            registry.rows.insert(record.id, record);
        }
        Ok(registry)
    }

    /// Insert or replace a row
    pub fn insert(&mut self, record: ProductRecord) {
        self.rows.insert(record.id, record);
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the registry has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl ProductRegistry for MemoryRegistry {
    fn get_product(&self, id: i64) -> Result<Option<ProductRecord>, RegistryError> {
        Ok(self.rows.get(&id).cloned())
    }
}
