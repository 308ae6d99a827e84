// aquacheck-core/src/application/report.rs
//
// In-memory check report shared by every check of a validation run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::domain::validation::CheckResult;
use crate::ports::report::ReportSink;

#[derive(Debug, Default)]
struct Entries {
    /// Context keys in first-append order.
    order: Vec<String>,
    by_context: HashMap<String, Vec<Arc<CheckResult>>>,
}

/// Append-only [`ReportSink`].
///
/// Appends take the write lock, so concurrent checks are serialized and each
/// result lands whole. Readers get `Arc` clones of finished results.
#[derive(Debug, Default)]
pub struct CheckReport {
    inner: RwLock<Entries>,
}

impl CheckReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context keys that received at least one entry, in first-append order.
    pub fn contexts(&self) -> Vec<String> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .order
            .clone()
    }

    pub fn len(&self) -> usize {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .by_context
            .values()
            .map(Vec::len)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Serializable copy of every entry, for downstream renderers.
    pub fn snapshot(&self) -> ReportSnapshot {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);

        let contexts = guard
            .order
            .iter()
            .map(|key| ContextEntries {
                context: key.clone(),
                results: guard
                    .by_context
                    .get(key)
                    .map(|v| v.iter().map(|r| CheckResult::clone(r)).collect())
                    .unwrap_or_default(),
            })
            .collect();

        ReportSnapshot {
            generated_at: Utc::now(),
            contexts,
        }
    }
}

// The lock only ever guards fully built entries, so a poisoned lock still
// holds consistent data and is recovered instead of propagated.
impl ReportSink for CheckReport {
    fn append(&self, context_key: &str, result: CheckResult) {
        let entry = Arc::new(result);
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);

        if !guard.by_context.contains_key(context_key) {
            guard.order.push(context_key.to_string());
        }
        guard
            .by_context
            .entry(context_key.to_string())
            .or_default()
            .push(entry);
    }

    fn entries_for(&self, context_key: &str) -> Vec<Arc<CheckResult>> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .by_context
            .get(context_key)
            .cloned()
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContextEntries {
    pub context: String,
    pub results: Vec<CheckResult>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportSnapshot {
    pub generated_at: DateTime<Utc>,
    pub contexts: Vec<ContextEntries>,
}

impl ReportSnapshot {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dataset::Component;
    use crate::domain::validation::{FieldTally, ScanOutcome};
    use std::thread;

    fn result(component: Component, incomplete: &[&str]) -> CheckResult {
        CheckResult::from_scan(
            component,
            ScanOutcome {
                total_records: 10,
                incomplete_ids: incomplete.iter().map(|s| s.to_string()).collect(),
                missing_by_field: vec![FieldTally {
                    field: "depth_m".into(),
                    missing: incomplete.len(),
                }],
            },
        )
    }

    #[test]
    fn test_unknown_context_is_empty() {
        let report = CheckReport::new();
        assert!(report.entries_for("never_used").is_empty());
        assert!(report.is_empty());
    }

    #[test]
    fn test_entries_keep_append_order_per_context() {
        let report = CheckReport::new();
        report.append("check", result(Component::WellStations, &["W-1"]));
        report.append("audit", result(Component::Reservoirs, &[]));
        report.append("check", result(Component::StreamGauges, &["G-1", "G-2"]));

        let check = report.entries_for("check");
        assert_eq!(check.len(), 2);
        assert_eq!(check[0].component(), Component::WellStations);
        assert_eq!(check[1].component(), Component::StreamGauges);

        assert_eq!(report.entries_for("audit").len(), 1);
        assert_eq!(report.contexts(), vec!["check", "audit"]);
        assert_eq!(report.len(), 3);
    }

    #[test]
    fn test_earlier_reads_are_not_affected_by_later_appends() {
        let report = CheckReport::new();
        report.append("check", result(Component::WellStations, &["W-1"]));

        let before = report.entries_for("check");
        report.append("check", result(Component::Diversions, &[]));

        assert_eq!(before.len(), 1);
        assert_eq!(report.entries_for("check").len(), 2);
    }

    #[test]
    fn test_concurrent_appends_lose_nothing() {
        let report = CheckReport::new();

        thread::scope(|s| {
            for component in Component::ALL {
                let report = &report;
                s.spawn(move || {
                    for _ in 0..50 {
                        report.append("parallel", result(component, &[]));
                    }
                });
            }
        });

        let entries = report.entries_for("parallel");
        assert_eq!(entries.len(), Component::ALL.len() * 50);
        for component in Component::ALL {
            let count = entries.iter().filter(|r| r.component() == component).count();
            assert_eq!(count, 50);
        }
    }

    #[test]
    fn test_snapshot_serializes_contexts_in_order() -> anyhow::Result<()> {
        let report = CheckReport::new();
        report.append("check", result(Component::WellStations, &["W-3"]));
        report.append("recheck", result(Component::WellStations, &[]));

        let snapshot = report.snapshot();
        assert_eq!(snapshot.contexts.len(), 2);
        assert_eq!(snapshot.contexts[0].context, "check");
        assert_eq!(snapshot.contexts[0].results[0].incomplete_ids(), ["W-3"]);

        let json: serde_json::Value = serde_json::from_str(&snapshot.to_json()?)?;
        assert_eq!(json["contexts"][0]["results"][0]["component"], "well_stations");
        assert_eq!(json["contexts"][0]["results"][0]["incomplete_count"], 1);
        assert_eq!(json["contexts"][1]["results"][0]["incomplete_count"], 0);
        Ok(())
    }
}
