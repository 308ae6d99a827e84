// aquacheck-core/src/infrastructure/adapters/memory.rs

use std::collections::BTreeMap;

use crate::domain::dataset::{Component, ComponentTable};
use crate::domain::error::DomainError;
use crate::ports::dataset::DataSet;

/// Data set already materialized in memory by a loader.
#[derive(Debug, Default, Clone)]
pub struct InMemoryDataSet {
    tables: BTreeMap<Component, ComponentTable>,
}

impl InMemoryDataSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a table. One schema per component: a second table for the
    /// same component is refused.
    pub fn register(&mut self, table: ComponentTable) -> Result<(), DomainError> {
        let component = table.component();
        if self.tables.contains_key(&component) {
            return Err(DomainError::DuplicateComponent(component));
        }
        self.tables.insert(component, table);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl DataSet for InMemoryDataSet {
    fn table(&self, component: Component) -> Option<&ComponentTable> {
        self.tables.get(&component)
    }

    fn components(&self) -> Vec<Component> {
        self.tables.keys().copied().collect()
    }
}
