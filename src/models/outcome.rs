use super::ProductRecord;
use crate::verifier::PayloadError;

/// Terminal classification of one scan attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// Registry lists the product as authorized
    Authorized(ProductRecord),
    /// Registry lists the product with any other status
    Counterfeit(ProductRecord),
    /// Well-formed id with no registry row
    NotFound {
        /// Parsed product id
        id: i64,
    },
    /// Payload carried the product prefix but could not be parsed
    Malformed(PayloadError),
    /// Nothing decoded
    NoSymbol,
    /// Decoded payload without the product prefix
    ForeignSymbol {
        /// Payload text (lossy UTF-8)
        payload: String,
    },
    /// The lookup itself could not run
    RegistryUnavailable {
        /// Parsed product id
        id: i64,
        /// Backend failure description
        reason: String,
    },
}

/// Message category shown to the operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    /// Positive result
    Success,
    /// Neutral result
    Info,
    /// Result that needs the operator's attention
    Warning,
}

/// Caller-side action offered after a verified scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowUp {
    /// Report a counterfeit product
    Report,
    /// Thank the operator for checking a genuine product
    Acknowledge,
}

impl FollowUp {
    /// Prompt shown on the action button
    pub fn prompt(&self) -> &'static str {
        match self {
            FollowUp::Report => "Report",
            FollowUp::Acknowledge => "the world can do with a smart shopper like you!",
        }
    }

    /// Message emitted once the action is taken
    pub fn confirmation(&self) -> &'static str {
        match self {
            FollowUp::Report => "Report submitted!",
            FollowUp::Acknowledge => "Keep being a good citizen",
        }
    }
}

impl ScanOutcome {
    /// Message category for this outcome
    pub fn kind(&self) -> MessageKind {
        match self {
            ScanOutcome::Authorized(_) => MessageKind::Success,
            ScanOutcome::Counterfeit(_)
            | ScanOutcome::Malformed(_)
            | ScanOutcome::RegistryUnavailable { .. } => MessageKind::Warning,
            ScanOutcome::NotFound { .. } | ScanOutcome::NoSymbol | ScanOutcome::ForeignSymbol { .. } => {
                MessageKind::Info
            }
        }
    }

    /// One-line message for the operator
    pub fn headline(&self) -> &'static str {
        match self {
            ScanOutcome::Authorized(_) => "Product is Authorized",
            ScanOutcome::Counterfeit(_) => "Product is Counterfeit",
            ScanOutcome::NotFound { .. } => "Product details not found.",
            ScanOutcome::Malformed(_) => "Error decoding QR code data.",
            ScanOutcome::NoSymbol => "No QR code found.",
            ScanOutcome::ForeignSymbol { .. } => "This QR code was not generated by PRODTRACK app.",
            ScanOutcome::RegistryUnavailable { .. } => "Product registry is unavailable.",
        }
    }

    /// Supporting lines: record fields verbatim, or the failure diagnosis
    pub fn details(&self) -> Vec<String> {
        match self {
            ScanOutcome::Authorized(record) | ScanOutcome::Counterfeit(record) => vec![
                format!("Product Name: {}", record.name),
                format!("Barcode: {}", record.barcode),
                format!("Expiry Date: {}", record.expiry_date),
                format!("Status: {}", record.status),
            ],
            ScanOutcome::Malformed(err) => vec![format!("Details: {}", err)],
            ScanOutcome::RegistryUnavailable { id, reason } => {
                vec![format!("Lookup of product {} failed: {}", id, reason)]
            }
            ScanOutcome::NotFound { .. } | ScanOutcome::NoSymbol | ScanOutcome::ForeignSymbol { .. } => {
                Vec::new()
            }
        }
    }

    /// Record behind a verified outcome
    pub fn record(&self) -> Option<&ProductRecord> {
        match self {
            ScanOutcome::Authorized(record) | ScanOutcome::Counterfeit(record) => Some(record),
            _ => None,
        }
    }

    /// Action the caller may offer next
    pub fn follow_up(&self) -> Option<FollowUp> {
        match self {
            ScanOutcome::Authorized(_) => Some(FollowUp::Acknowledge),
            ScanOutcome::Counterfeit(_) => Some(FollowUp::Report),
            _ => None,
        }
    }
}
