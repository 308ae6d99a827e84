// aquacheck-core/src/application/run.rs
//
// USE CASE: check every selected component of a project's data set and
// persist the resulting report.

use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};

use crate::application::check::ComponentDataCheck;
use crate::application::report::CheckReport;
use crate::domain::dataset::Component;
use crate::domain::error::DomainError;
use crate::domain::validation::CheckResult;
use crate::error::AquaCheckError;
use crate::infrastructure::config::project::load_project_config;
use crate::infrastructure::fs::persist_report;
use crate::infrastructure::loader::load_data_set;
use crate::ports::dataset::DataSet;
use crate::ports::report::ReportSink;

pub const REPORT_FILE: &str = "check_report.json";

#[derive(Debug)]
pub struct ComponentFailure {
    pub component: Component,
    pub error: DomainError,
}

#[derive(Debug, Default)]
pub struct RunSummary {
    pub results: Vec<CheckResult>,
    pub failures: Vec<ComponentFailure>,
}

impl RunSummary {
    pub fn incomplete_records(&self) -> usize {
        self.results.iter().map(CheckResult::incomplete_count).sum()
    }

    /// No failed check and no incomplete record.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty() && self.incomplete_records() == 0
    }
}

/// Checks `components` one after the other; an empty selection means every
/// component the data set registers. A failing component does not stop the run.
#[instrument(skip_all, fields(context = check.context_key()))]
pub fn run_checks(
    data_set: &dyn DataSet,
    components: &[Component],
    check: &ComponentDataCheck,
    sink: &dyn ReportSink,
) -> RunSummary {
    let selection = if components.is_empty() {
        data_set.components()
    } else {
        components.to_vec()
    };

    let mut summary = RunSummary::default();

    for component in selection {
        match check.check(component, data_set, sink) {
            Ok(result) => {
                info!(
                    %component,
                    total = result.total_records(),
                    incomplete = result.incomplete_count(),
                    "Component checked"
                );
                summary.results.push(result);
            }
            Err(error) => {
                warn!(%component, %error, "Component check failed");
                summary.failures.push(ComponentFailure { component, error });
            }
        }
    }

    summary
}

#[derive(Debug, Default, Clone)]
pub struct RunOptions {
    /// Overrides the components listed in the project config.
    pub components: Vec<Component>,
    /// Overrides the context key from the project config.
    pub context: Option<String>,
}

#[derive(Debug)]
pub struct ProjectRun {
    pub project_name: String,
    pub context: String,
    pub summary: RunSummary,
    pub report_path: PathBuf,
}

/// Loads the project config and data set, runs the checks, and writes
/// `<target-path>/check_report.json`.
#[instrument(skip(options))]
pub fn run_project(project_dir: &Path, options: RunOptions) -> Result<ProjectRun, AquaCheckError> {
    let config = load_project_config(project_dir)?;
    let data_set = load_data_set(project_dir, &config.data_paths)?;

    let context = options.context.unwrap_or_else(|| config.context.clone());
    let components = if options.components.is_empty() {
        config.components.clone()
    } else {
        options.components
    };

    let report = CheckReport::new();
    let check = ComponentDataCheck::new(context.clone());
    let summary = run_checks(&data_set, &components, &check, &report);

    let report_path = project_dir.join(&config.target_path).join(REPORT_FILE);
    persist_report(&report_path, &report.snapshot())?;
    info!(path = ?report_path, entries = report.len(), "Check report written");

    Ok(ProjectRun {
        project_name: config.name,
        context,
        summary,
        report_path,
    })
}
