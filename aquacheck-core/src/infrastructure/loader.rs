// aquacheck-core/src/infrastructure/loader.rs
//
// Reads YAML data-set files into an InMemoryDataSet.

use serde::Deserialize;
use serde_yaml::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};
use walkdir::WalkDir;

use crate::domain::dataset::{Component, ComponentSchema, ComponentTable, FieldValue, Record};
use crate::infrastructure::adapters::memory::InMemoryDataSet;
use crate::infrastructure::error::InfrastructureError;

const SUPPORTED_EXTENSIONS: [&str; 2] = ["yaml", "yml"];

// --- DTOs ---

#[derive(Debug, Deserialize)]
struct DataSetFile {
    #[serde(default)]
    components: Vec<ComponentDocument>,
}

#[derive(Debug, Deserialize)]
struct ComponentDocument {
    component: Component,
    #[serde(default)]
    schema: ComponentSchema,
    /// `None` when the key is omitted or `null`.
    #[serde(default)]
    records: Option<Vec<Vec<Value>>>,
}

/// Loads every data-set file found under `data_paths` (relative to `project_dir`),
/// in file-name order.
#[instrument(skip(project_dir))]
pub fn load_data_set(
    project_dir: &Path,
    data_paths: &[String],
) -> Result<InMemoryDataSet, InfrastructureError> {
    let mut data_set = InMemoryDataSet::new();

    for rel in data_paths {
        let dir = project_dir.join(rel);
        if !dir.is_dir() {
            return Err(InfrastructureError::ConfigError(format!(
                "Data path {:?} does not exist or is not a directory",
                dir
            )));
        }

        for path in discover_files(&dir)? {
            load_data_set_file(&path, &mut data_set)?;
        }
    }

    info!(components = data_set.len(), "Data set loaded");
    Ok(data_set)
}

/// Data-set files under `dir`. A walk error (unreadable directory, dangling
/// link) fails the load instead of silently hiding a component.
fn discover_files(dir: &Path) -> Result<Vec<PathBuf>, InfrastructureError> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir).follow_links(true).sort_by_file_name() {
        let path = entry.map_err(|e| InfrastructureError::Io(e.into()))?.into_path();
        let supported = path
            .extension()
            .and_then(|s| s.to_str())
            .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext));

        if path.is_file() && supported {
            files.push(path);
        }
    }

    Ok(files)
}

/// Parses one file and registers its components into `data_set`.
pub fn load_data_set_file(
    path: &Path,
    data_set: &mut InMemoryDataSet,
) -> Result<(), InfrastructureError> {
    let content = fs::read_to_string(path)?;
    let file: DataSetFile =
        serde_yaml::from_str(&content).map_err(|source| InfrastructureError::YamlError {
            path: path.to_path_buf(),
            source,
        })?;

    for doc in file.components {
        let component = doc.component;
        let records = doc
            .records
            .map(|rows| convert_rows(path, component, rows))
            .transpose()?;

        debug!(
            path = ?path,
            %component,
            records = records.as_ref().map(Vec::len),
            "Registering component"
        );

        let table = ComponentTable::new(component, doc.schema, records).map_err(|source| {
            InfrastructureError::DataSet {
                path: path.to_path_buf(),
                source,
            }
        })?;
        data_set
            .register(table)
            .map_err(|source| InfrastructureError::DataSet {
                path: path.to_path_buf(),
                source,
            })?;
    }

    Ok(())
}

fn convert_rows(
    path: &Path,
    component: Component,
    rows: Vec<Vec<Value>>,
) -> Result<Vec<Record>, InfrastructureError> {
    rows.into_iter()
        .enumerate()
        .map(|(row, cells)| {
            cells
                .into_iter()
                .enumerate()
                .map(|(field, cell)| {
                    to_field_value(cell).map_err(|detail| InfrastructureError::InvalidFieldValue {
                        path: path.to_path_buf(),
                        component: component.to_string(),
                        row: row + 1,
                        field: field + 1,
                        detail,
                    })
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Record::new)
        })
        .collect()
}

fn to_field_value(cell: Value) -> Result<FieldValue, String> {
    match cell {
        Value::Null => Ok(FieldValue::Missing),
        Value::String(s) => Ok(FieldValue::Text(s)),
        Value::Bool(b) => Ok(FieldValue::Text(b.to_string())),
        Value::Number(n) => n
            .as_f64()
            .map(FieldValue::Number)
            .ok_or_else(|| format!("number {} is not representable", n)),
        Value::Sequence(_) | Value::Mapping(_) => Err("nested values are not fields".to_string()),
        Value::Tagged(tagged) => Err(format!("tagged value {} is not supported", tagged.tag)),
    }
}
