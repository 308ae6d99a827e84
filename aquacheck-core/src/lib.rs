// aquacheck-core/src/lib.rs

#![allow(missing_docs)]
// 1. Memory safety
#![deny(unsafe_code)]
// 2. Robustness
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
// 3. Performance
#![warn(clippy::perf)]

// --- HEXAGONAL MODULES ---

// 1. Ports (Interfaces / Traits)
// Contracts for the bound data set and the report sink.
pub mod ports;

// 2. Domain
// Data model, field classifier, record scanner.
// Depends on nothing else in the crate.
pub mod domain;

// 3. Infrastructure (Adapters)
// Project config, YAML data-set loader, in-memory data set, report persistence.
pub mod infrastructure;

// 4. Application (Use Cases)
// Component data check, batch run, check report.
pub mod application;

// --- GLOBAL ERROR ---
pub mod error;

// --- RE-EXPORTS (FACADE) ---
pub use error::AquaCheckError;
