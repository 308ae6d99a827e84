// aquacheck-core/src/domain/dataset/table.rs

use serde::{Deserialize, Serialize};

use super::component::Component;
use super::field::{FieldSchema, FieldType, FieldValue};
use crate::domain::error::DomainError;

/// Ordered field declarations of one component. Its length is the fixed
/// arity every record of the component must have.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct ComponentSchema {
    fields: Vec<FieldSchema>,
}

impl ComponentSchema {
    pub fn new(fields: Vec<FieldSchema>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[FieldSchema] {
        &self.fields
    }

    pub fn arity(&self) -> usize {
        self.fields.len()
    }

    fn identifier_index(&self) -> Option<usize> {
        self.fields
            .iter()
            .position(|f| f.field_type == FieldType::Identifier)
    }

    /// Identifier reported for a record: the first identifier field when it
    /// holds a non-empty value, else its 1-based row label.
    pub fn record_label(&self, record: &Record, row_index: usize) -> String {
        let id = self
            .identifier_index()
            .and_then(|idx| record.values().get(idx))
            .and_then(|value| match value {
                FieldValue::Text(s) if !s.is_empty() => Some(s.clone()),
                FieldValue::Number(n) => Some(n.to_string()),
                _ => None,
            });

        id.unwrap_or_else(|| format!("row {}", row_index + 1))
    }
}

/// One row of field values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Record {
    values: Vec<FieldValue>,
}

impl Record {
    pub fn new(values: Vec<FieldValue>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[FieldValue] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<V: Into<FieldValue>> FromIterator<V> for Record {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

/// The records one component holds inside a bound data set.
///
/// `records` is `None` when the loader registered the component but never
/// materialized a collection for it.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentTable {
    component: Component,
    schema: ComponentSchema,
    records: Option<Vec<Record>>,
}

impl ComponentTable {
    /// Builds a table, rejecting any record whose arity differs from the schema.
    pub fn new(
        component: Component,
        schema: ComponentSchema,
        records: Option<Vec<Record>>,
    ) -> Result<Self, DomainError> {
        if let Some(rows) = &records
            && let Some((row, bad)) = rows
                .iter()
                .enumerate()
                .find(|(_, r)| r.len() != schema.arity())
        {
            return Err(DomainError::SchemaMismatch {
                component,
                row: row + 1,
                expected: schema.arity(),
                actual: bad.len(),
            });
        }

        Ok(Self {
            component,
            schema,
            records,
        })
    }

    pub fn component(&self) -> Component {
        self.component
    }

    pub fn schema(&self) -> &ComponentSchema {
        &self.schema
    }

    pub fn records(&self) -> Option<&[Record]> {
        self.records.as_deref()
    }

    pub fn record_count(&self) -> Option<usize> {
        self.records.as_ref().map(Vec::len)
    }
}
