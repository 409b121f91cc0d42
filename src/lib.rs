//! prod_scan - product authenticity scanning
//!
//! Decodes product QR codes from uploaded images or live camera frames and
//! verifies them against a product registry. A scan ends in exactly one
//! [`ScanOutcome`]: authorized, counterfeit, not found, malformed, foreign
//! symbol, no symbol, or registry unavailable.
//!
//! # Example
//! ```
//! use prod_scan::{MemoryRegistry, ProductRecord, ScanOutcome, Verifier};
//!
//! let registry = MemoryRegistry::from_records([ProductRecord::new(
//!     42, "Widget", "0123456789", "2026-01-01", "AUTHORIZED",
//! )])
//! .unwrap();
//! let verifier = Verifier::new(registry);
//! let outcome = verifier.verify_payload(b"PRODAPP: 42\nEXTRA");
//! assert!(matches!(outcome, ScanOutcome::Authorized(_)));
//! ```

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Frame sources and sinks for live capture
pub mod capture;
/// Environment-driven settings
pub mod config;
/// QR symbol location and decoding
pub mod decoder;
/// Error types
pub mod error;
/// Packed 3-channel frames
pub mod frame;
/// Core data structures (DecodedSymbol, ProductRecord, ScanOutcome, Point)
pub mod models;
/// Symbol outline rendering
pub mod overlay;
/// Scan-decode-verify pipeline
pub mod pipeline;
/// Product registry backends
pub mod registry;
/// File helpers for images and datasets
pub mod tools;
/// Utility functions (grayscale, geometry)
pub mod utils;
/// Payload parsing and verification
pub mod verifier;

#[cfg(test)]
mod test_utils;

pub use capture::{DirectorySink, FrameSink, FrameSource, ImageSequenceSource, MemorySource};
pub use config::ScanConfig;
pub use decoder::{decode_frame, decode_still};
pub use error::{DecodeError, FrameError, RegistryError};
pub use frame::Frame;
pub use models::{
    DecodedSymbol, FollowUp, MessageKind, Point, ProductRecord, ProductStatus, ScanOutcome,
};
pub use overlay::{OutlineStyle, draw_outline};
pub use pipeline::{BatchItem, LiveScan, LiveStop, Scanner};
pub use registry::{JsonRegistry, MemoryRegistry, ProductRegistry};
pub use utils::grayscale::ChannelOrder;
pub use verifier::{PAYLOAD_PREFIX, PayloadError, Verifier, parse_product_id};
