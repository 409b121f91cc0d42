use super::{MemoryRegistry, ProductRegistry};
use crate::error::RegistryError;
use crate::models::ProductRecord;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// On-disk layout: either a bare array of rows or `{ "products": [...] }`
#[derive(Deserialize)]
#[serde(untagged)]
enum RegistryFile {
    Table { products: Vec<ProductRecord> },
    Rows(Vec<ProductRecord>),
}

/// Registry backed by a JSON export of the `products` table
///
/// Each row has the columns `id`, `product_name`, `barcode`,
/// `expiry_date` and `status`. The file is read once on open and the handle
/// answers lookups until dropped.
#[derive(Debug, Clone)]
pub struct JsonRegistry {
    path: PathBuf,
    rows: MemoryRegistry,
}

impl JsonRegistry {
    /// Open and load a registry file
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, RegistryError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let registry = Self::from_json(&contents, path)?;
        log::info!(
            "Opened product registry {} ({} products)",
            path.display(),
            registry.len()
        );
        Ok(registry)
    }

    fn from_json(contents: &str, path: &Path) -> Result<Self, RegistryError> {
        let records = match serde_json::from_str::<RegistryFile>(contents)? {
            RegistryFile::Table { products } => products,
            RegistryFile::Rows(rows) => rows,
        };
        Ok(Self {
            path: path.to_path_buf(),
            rows: MemoryRegistry::from_records(records)?,
        })
    }

    /// Path the registry was loaded from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of products
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the registry has no products
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl ProductRegistry for JsonRegistry {
    fn get_product(&self, id: i64) -> Result<Option<ProductRecord>, RegistryError> {
        self.rows.get_product(id)
    }
}
