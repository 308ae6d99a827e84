// aquacheck-core/src/ports/dataset.rs

// What the checks need from a loaded data set, without knowing how it was loaded.
// The loader has already materialized everything in memory, so access is synchronous.

use crate::domain::dataset::{Component, ComponentTable};

pub trait DataSet: Send + Sync {
    /// Table registered for `component`, if any.
    fn table(&self, component: Component) -> Option<&ComponentTable>;

    /// Registered components, in `Component` declaration order.
    fn components(&self) -> Vec<Component>;
}
