// aquacheck-core/src/ports/report.rs

use std::sync::Arc;

use crate::domain::validation::CheckResult;

/// Append-only store of check results, keyed by the context that produced them
/// (usually the invoking command name).
pub trait ReportSink: Send + Sync {
    /// Adds one completed result. Prior entries are never touched.
    fn append(&self, context_key: &str, result: CheckResult);

    /// Entries recorded under `context_key`, in append order. Unknown keys yield
    /// an empty list.
    fn entries_for(&self, context_key: &str) -> Vec<Arc<CheckResult>>;
}
