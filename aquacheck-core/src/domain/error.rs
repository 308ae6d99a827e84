// aquacheck-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

use crate::domain::dataset::Component;

#[derive(Error, Debug, Diagnostic, PartialEq)]
pub enum DomainError {
    #[error("Invalid argument: {0}")]
    #[diagnostic(
        code(aquacheck::domain::invalid_argument),
        help("The data set registered this component without a record collection.")
    )]
    InvalidArgument(String),

    #[error("Component '{0}' is not registered in the data set")]
    #[diagnostic(
        code(aquacheck::domain::unknown_component),
        help("Run `aquacheck components` to list the components the data set provides.")
    )]
    UnknownComponent(Component),

    #[error("Component '{0}' is registered twice")]
    #[diagnostic(code(aquacheck::domain::duplicate_component))]
    DuplicateComponent(Component),

    #[error("Record {row} of '{component}' has {actual} fields, schema declares {expected}")]
    #[diagnostic(code(aquacheck::domain::schema))]
    SchemaMismatch {
        component: Component,
        row: usize,
        expected: usize,
        actual: usize,
    },
}
