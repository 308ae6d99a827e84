// aquacheck-core/src/domain/validation/classifier.rs

use serde::{Deserialize, Serialize};

use crate::domain::dataset::{FieldType, FieldValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldStatus {
    Valid,
    Missing,
}

impl FieldStatus {
    pub fn is_missing(self) -> bool {
        self == Self::Missing
    }
}

/// Decides whether a single value counts as present for its declared type.
///
/// Sign carries no meaning: `0` and negative numbers are valid. Text and
/// identifier fields are only missing when empty. Numeric text is parsed
/// as-is (no trimming, `.` as decimal separator). Anything `f64` accepts,
/// including `NaN` and `inf`, counts as present.
pub fn classify(value: &FieldValue, declared: FieldType) -> FieldStatus {
    let present = match (value, declared) {
        (FieldValue::Missing, _) => false,
        (FieldValue::Text(s), _) if s.is_empty() => false,
        (FieldValue::Text(s), FieldType::Numeric) => parses_as_number(s),
        (FieldValue::Text(_), FieldType::Text | FieldType::Identifier) => true,
        (FieldValue::Number(_), _) => true,
    };

    if present {
        FieldStatus::Valid
    } else {
        FieldStatus::Missing
    }
}

fn parses_as_number(raw: &str) -> bool {
    raw.parse::<f64>().is_ok()
}
