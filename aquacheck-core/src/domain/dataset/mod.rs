// aquacheck-core/src/domain/dataset/mod.rs

pub mod component;
pub mod field;
pub mod table;

pub use component::Component;
pub use field::{FieldSchema, FieldType, FieldValue};
pub use table::{ComponentSchema, ComponentTable, Record};
