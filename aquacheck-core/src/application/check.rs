// aquacheck-core/src/application/check.rs
//
// USE CASE: completeness check of one component of a bound data set.

use crate::domain::dataset::Component;
use crate::domain::error::DomainError;
use crate::domain::validation::{CheckResult, RecordScanner};
use crate::ports::dataset::DataSet;
use crate::ports::report::ReportSink;

/// Runs the record scanner over one component and files the result under a
/// fixed context key.
///
/// The data set and the sink are borrowed per call. A failed check appends
/// nothing, and a successful one appends exactly once. Failures are returned
/// as-is and never retried: scanning unchanged data again gives the same answer.
#[derive(Debug, Clone)]
pub struct ComponentDataCheck {
    context_key: String,
}

impl ComponentDataCheck {
    pub fn new(context_key: impl Into<String>) -> Self {
        Self {
            context_key: context_key.into(),
        }
    }

    pub fn context_key(&self) -> &str {
        &self.context_key
    }

    pub fn check(
        &self,
        component: Component,
        data_set: &dyn DataSet,
        sink: &dyn ReportSink,
    ) -> Result<CheckResult, DomainError> {
        let table = data_set
            .table(component)
            .ok_or(DomainError::UnknownComponent(component))?;

        let outcome = RecordScanner::new(table.schema()).scan(table.records())?;
        let result = CheckResult::from_scan(component, outcome);

        sink.append(&self.context_key, result.clone());
        Ok(result)
    }
}
