use serde::{Deserialize, Serialize};
use std::fmt;

/// Status literal that marks a genuine product
pub const AUTHORIZED: &str = "AUTHORIZED";

/// Registry status of a product
///
/// Only the literal `AUTHORIZED` is special. Every other value is kept
/// verbatim so it can be shown to the operator as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProductStatus {
    /// The product is genuine
    Authorized,
    /// Any other registry value (counterfeit, revoked, empty, ...)
    Other(String),
}

impl ProductStatus {
    /// Check for the authorized status
    pub fn is_authorized(&self) -> bool {
        matches!(self, ProductStatus::Authorized)
    }

    /// Status exactly as stored in the registry
    pub fn as_str(&self) -> &str {
        match self {
            ProductStatus::Authorized => AUTHORIZED,
            ProductStatus::Other(s) => s,
        }
    }
}

impl From<String> for ProductStatus {
    fn from(s: String) -> Self {
        if s == AUTHORIZED {
            ProductStatus::Authorized
        } else {
            ProductStatus::Other(s)
        }
    }
}

impl From<&str> for ProductStatus {
    fn from(s: &str) -> Self {
        ProductStatus::from(s.to_string())
    }
}

impl From<ProductStatus> for String {
    fn from(status: ProductStatus) -> Self {
        match status {
            ProductStatus::Authorized => AUTHORIZED.to_string(),
            ProductStatus::Other(s) => s,
        }
    }
}

impl fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the product registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Registry primary key
    pub id: i64,
    /// Product display name
    #[serde(rename = "product_name")]
    pub name: String,
    /// Printed barcode
    pub barcode: String,
    /// Expiry date, kept as stored
    pub expiry_date: String,
    /// Authenticity status
    pub status: ProductStatus,
}

impl ProductRecord {
    /// Create a record
    pub fn new(
        id: i64,
        name: impl Into<String>,
        barcode: impl Into<String>,
        expiry_date: impl Into<String>,
        status: impl Into<ProductStatus>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            barcode: barcode.into(),
            expiry_date: expiry_date.into(),
            status: status.into(),
        }
    }
}
