// aquacheck-core/src/domain/project.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::dataset::Component;

#[derive(Debug, Deserialize, Serialize, Clone, Validate)]
pub struct ProjectConfig {
    #[validate(length(min = 1, message = "Project name cannot be empty"))]
    pub name: String,

    #[serde(default = "default_version")]
    pub version: String,

    /// Directories scanned for data-set files, relative to the project root.
    #[validate(length(min = 1, message = "At least one data path is required"))]
    #[serde(rename = "data-paths", default = "default_data_paths")]
    pub data_paths: Vec<String>,

    #[serde(rename = "target-path", default = "default_target_path")]
    pub target_path: String,

    /// Context key the report entries are filed under.
    #[validate(length(min = 1, message = "Context key cannot be empty"))]
    #[serde(default = "default_context")]
    pub context: String,

    /// Components to check. Empty means all registered components.
    #[serde(default)]
    pub components: Vec<Component>,
}

fn default_version() -> String {
    "0.1.0".to_string()
}
fn default_data_paths() -> Vec<String> {
    vec!["data".to_string()]
}
fn default_target_path() -> String {
    "target".to_string()
}
fn default_context() -> String {
    "check".to_string()
}
