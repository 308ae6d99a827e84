// aquacheck-core/src/infrastructure/error.rs

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

use crate::domain::error::DomainError;

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(aquacheck::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    // --- CONFIG / YAML ---
    #[error("YAML Parsing Error in {path:?}: {source}")]
    #[diagnostic(
        code(aquacheck::infra::yaml),
        help("Check your YAML syntax (indentation, types).")
    )]
    YamlError {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Report serialization failed: {0}")]
    #[diagnostic(code(aquacheck::infra::json))]
    JsonError(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    #[diagnostic(code(aquacheck::infra::config))]
    ConfigError(String),

    #[error("Project configuration not found: {0}")]
    #[diagnostic(code(aquacheck::infra::config_missing))]
    ConfigNotFound(String),

    #[error("Invalid project configuration: {0}")]
    #[diagnostic(
        code(aquacheck::infra::config_invalid),
        help("Fix the listed fields in aquacheck.yaml.")
    )]
    InvalidConfig(#[from] validator::ValidationErrors),

    // --- DATA SET FILES ---
    #[error("Unsupported value in {path:?} ({component}, record {row}, field {field}): {detail}")]
    #[diagnostic(
        code(aquacheck::infra::field_value),
        help("Field values must be strings, numbers, booleans or null.")
    )]
    InvalidFieldValue {
        path: PathBuf,
        component: String,
        row: usize,
        field: usize,
        detail: String,
    },

    #[error("Data set file {path:?} is inconsistent: {source}")]
    #[diagnostic(code(aquacheck::infra::data_set))]
    DataSet {
        path: PathBuf,
        #[source]
        source: DomainError,
    },
}
