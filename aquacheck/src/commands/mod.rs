// aquacheck/src/commands/mod.rs

pub mod check;
pub mod components;
