// aquacheck-core/src/application/mod.rs

pub mod check;
pub mod report;
pub mod run;

// --- RE-EXPORTS (FACADE PATTERN) ---
// Lets the CLI do `use aquacheck_core::application::{run_project, CheckReport};`

pub use check::ComponentDataCheck;
pub use report::{CheckReport, ReportSnapshot};
pub use run::{ProjectRun, RunOptions, RunSummary, run_checks, run_project};
