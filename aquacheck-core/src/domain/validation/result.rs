// aquacheck-core/src/domain/validation/result.rs

use serde::{Deserialize, Serialize};

use super::scanner::ScanOutcome;
use crate::domain::dataset::Component;

/// Missing-value count for one field of a component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldTally {
    pub field: String,
    pub missing: usize,
}

/// Outcome of one completeness check on one component.
///
/// Fields are private: a result is never edited once built. Deserialized
/// results go through the same count checks as scanned ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCheckResult")]
pub struct CheckResult {
    component: Component,
    total_records: usize,
    incomplete_count: usize,
    incomplete_ids: Vec<String>,
    missing_by_field: Vec<FieldTally>,
}

/// Wire shape of a `CheckResult` before its counts are checked.
#[derive(Deserialize)]
struct RawCheckResult {
    component: Component,
    total_records: usize,
    incomplete_count: usize,
    incomplete_ids: Vec<String>,
    missing_by_field: Vec<FieldTally>,
}

impl TryFrom<RawCheckResult> for CheckResult {
    type Error = String;

    fn try_from(raw: RawCheckResult) -> Result<Self, Self::Error> {
        if raw.incomplete_count != raw.incomplete_ids.len() {
            return Err(format!(
                "{}: incomplete_count is {} but {} incomplete ids are listed",
                raw.component,
                raw.incomplete_count,
                raw.incomplete_ids.len()
            ));
        }
        if raw.incomplete_count > raw.total_records {
            return Err(format!(
                "{}: {} incomplete records out of only {}",
                raw.component, raw.incomplete_count, raw.total_records
            ));
        }
        if let Some(tally) = raw
            .missing_by_field
            .iter()
            .find(|t| t.missing > raw.total_records)
        {
            return Err(format!(
                "{}: field '{}' misses {} values out of {} records",
                raw.component, tally.field, tally.missing, raw.total_records
            ));
        }

        Ok(Self {
            component: raw.component,
            total_records: raw.total_records,
            incomplete_count: raw.incomplete_count,
            incomplete_ids: raw.incomplete_ids,
            missing_by_field: raw.missing_by_field,
        })
    }
}

impl CheckResult {
    pub fn from_scan(component: Component, outcome: ScanOutcome) -> Self {
        Self {
            component,
            total_records: outcome.total_records,
            incomplete_count: outcome.incomplete_ids.len(),
            incomplete_ids: outcome.incomplete_ids,
            missing_by_field: outcome.missing_by_field,
        }
    }

    pub fn component(&self) -> Component {
        self.component
    }

    pub fn total_records(&self) -> usize {
        self.total_records
    }

    pub fn incomplete_count(&self) -> usize {
        self.incomplete_count
    }

    pub fn incomplete_ids(&self) -> &[String] {
        &self.incomplete_ids
    }

    pub fn missing_by_field(&self) -> &[FieldTally] {
        &self.missing_by_field
    }

    pub fn is_complete(&self) -> bool {
        self.incomplete_count == 0
    }

    /// Share of complete records in `[0, 1]`. An empty component counts as complete.
    pub fn completeness(&self) -> f64 {
        if self.total_records == 0 {
            return 1.0;
        }
        self.total_records.saturating_sub(self.incomplete_count) as f64 / self.total_records as f64
    }
}
