// aquacheck-core/src/domain/validation/mod.rs

pub mod classifier;
pub mod result;
pub mod scanner;

pub use classifier::{FieldStatus, classify};
pub use result::{CheckResult, FieldTally};
pub use scanner::{RecordScanner, ScanOutcome};
