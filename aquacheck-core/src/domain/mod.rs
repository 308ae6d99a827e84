pub mod dataset;
pub mod error;
pub mod project;
pub mod validation;

// Re-exports to keep imports short elsewhere
pub use error::DomainError;
pub use project::ProjectConfig;
