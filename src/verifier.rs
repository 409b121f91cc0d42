//! Payload parsing and registry verification
//!
//! One scan attempt runs through these steps. Each step either produces the
//! final [`ScanOutcome`] or passes on to the next one.
//!
//! 1. no symbol → [`ScanOutcome::NoSymbol`]
//! 2. prefix check → [`ScanOutcome::ForeignSymbol`]
//! 3. id parse → [`ScanOutcome::Malformed`]
//! 4. registry lookup → `NotFound`, `Authorized`, `Counterfeit`, or
//!    `RegistryUnavailable`

use crate::models::{DecodedSymbol, ScanOutcome};
use crate::registry::ProductRegistry;
use std::num::ParseIntError;
use std::str::Utf8Error;
use thiserror::Error;

/// Literal every product payload starts with
pub const PAYLOAD_PREFIX: &str = "PRODAPP:";

/// Separator between the prefix and the id on the first payload line
pub const ID_SEPARATOR: &str = ": ";

/// Structural failure in a prefixed payload
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayloadError {
    /// Payload bytes are not UTF-8 text
    #[error("payload is not valid UTF-8: {0}")]
    NotUtf8(#[from] Utf8Error),
    /// First line has no `": "` separator
    #[error("first line has no \": \" separator")]
    MissingSeparator,
    /// Token after the separator is not an integer
    #[error("invalid product id {token:?}: {source}")]
    InvalidId {
        /// Text that failed to parse
        token: String,
        /// Underlying integer parse failure
        source: ParseIntError,
    },
}

/// Check whether a payload is a product reference
pub fn has_product_prefix(payload: &[u8]) -> bool {
    payload.starts_with(PAYLOAD_PREFIX.as_bytes())
}

/// Extract the product id from payload text
///
/// Takes the first line, splits it on `": "` and parses the second token.
/// Whitespace around the token is ignored.
pub fn parse_product_id(text: &str) -> Result<i64, PayloadError> {
    let first_line = text.split('\n').next().unwrap_or_default();
    let token = first_line
        .split(ID_SEPARATOR)
        .nth(1)
        .ok_or(PayloadError::MissingSeparator)?;
    token
        .trim()
        .parse::<i64>()
        .map_err(|source| PayloadError::InvalidId {
            token: token.to_string(),
            source,
        })
}

/// Format a payload for an id (inverse of [`parse_product_id`])
pub fn product_payload(id: i64) -> String {
    format!("{PAYLOAD_PREFIX} {id}")
}

/// Verifies decoded payloads against an owned registry handle
#[derive(Debug)]
pub struct Verifier<R> {
    registry: R,
}

impl<R: ProductRegistry> Verifier<R> {
    /// Take ownership of a registry handle
    pub fn new(registry: R) -> Self {
        Self { registry }
    }

    /// Borrow the registry
    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Release the registry handle
    pub fn into_registry(self) -> R {
        self.registry
    }

    /// Classify the first symbol of a scan attempt
    pub fn verify(&self, symbol: Option<&DecodedSymbol>) -> ScanOutcome {
        match symbol {
            Some(symbol) => self.verify_payload(&symbol.payload),
            None => ScanOutcome::NoSymbol,
        }
    }

    /// Classify a raw payload
    pub fn verify_payload(&self, payload: &[u8]) -> ScanOutcome {
        if !has_product_prefix(payload) {
            return ScanOutcome::ForeignSymbol {
                payload: String::from_utf8_lossy(payload).into_owned(),
            };
        }

        let id = match std::str::from_utf8(payload)
            .map_err(PayloadError::from)
            .and_then(parse_product_id)
        {
            Ok(id) => id,
            Err(err) => {
                log::warn!("Malformed product payload: {}", err);
                return ScanOutcome::Malformed(err);
            }
        };

        match self.registry.get_product(id) {
            Ok(Some(record)) if record.status.is_authorized() => ScanOutcome::Authorized(record),
            Ok(Some(record)) => ScanOutcome::Counterfeit(record),
            Ok(None) => ScanOutcome::NotFound { id },
            Err(err) => {
                log::warn!("Registry lookup for product {} failed: {}", id, err);
                ScanOutcome::RegistryUnavailable {
                    id,
                    reason: err.to_string(),
                }
            }
        }
    }
}
