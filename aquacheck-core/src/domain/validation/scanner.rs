// aquacheck-core/src/domain/validation/scanner.rs

use super::classifier::classify;
use super::result::FieldTally;
use crate::domain::dataset::{ComponentSchema, Record};
use crate::domain::error::DomainError;

/// Tallies produced by a scan. Only the scanner builds one, so the
/// incomplete labels never outnumber the scanned records.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScanOutcome {
    pub(crate) total_records: usize,
    /// Labels of incomplete records, in input order.
    pub(crate) incomplete_ids: Vec<String>,
    /// Missing values per field, in schema order.
    pub(crate) missing_by_field: Vec<FieldTally>,
}

impl ScanOutcome {
    pub fn total_records(&self) -> usize {
        self.total_records
    }

    pub fn incomplete_ids(&self) -> &[String] {
        &self.incomplete_ids
    }

    pub fn missing_by_field(&self) -> &[FieldTally] {
        &self.missing_by_field
    }

    pub fn incomplete_count(&self) -> usize {
        self.incomplete_ids.len()
    }
}

/// Applies the field classifier to every field of every record of a component.
pub struct RecordScanner<'a> {
    schema: &'a ComponentSchema,
}

impl<'a> RecordScanner<'a> {
    pub fn new(schema: &'a ComponentSchema) -> Self {
        Self { schema }
    }

    /// Scans `records` in order. An absent collection is refused rather than
    /// read as zero records.
    pub fn scan(&self, records: Option<&[Record]>) -> Result<ScanOutcome, DomainError> {
        let records = records.ok_or_else(|| {
            DomainError::InvalidArgument("record collection is absent, nothing to scan".into())
        })?;

        let fields = self.schema.fields();
        let mut missing_per_field = vec![0usize; fields.len()];
        let mut incomplete_ids = Vec::new();

        for (row, record) in records.iter().enumerate() {
            let mut missing_in_record = 0usize;

            // Arity is guaranteed by ComponentTable; zip keeps a stray record from panicking.
            for ((value, field), tally) in record
                .values()
                .iter()
                .zip(fields)
                .zip(missing_per_field.iter_mut())
            {
                if classify(value, field.field_type).is_missing() {
                    missing_in_record += 1;
                    *tally += 1;
                }
            }

            if missing_in_record > 0 {
                incomplete_ids.push(self.schema.record_label(record, row));
            }
        }

        let missing_by_field = fields
            .iter()
            .zip(missing_per_field)
            .map(|(field, missing)| FieldTally {
                field: field.name.clone(),
                missing,
            })
            .collect();

        Ok(ScanOutcome {
            total_records: records.len(),
            incomplete_ids,
            missing_by_field,
        })
    }
}
