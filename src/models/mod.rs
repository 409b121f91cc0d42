pub mod outcome;
pub mod point;
pub mod product;
pub mod symbol;

pub use outcome::{FollowUp, MessageKind, ScanOutcome};
pub use point::Point;
pub use product::{ProductRecord, ProductStatus};
pub use symbol::DecodedSymbol;
