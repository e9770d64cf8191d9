//! CLI library components for the HPO to FHIR converter.

pub mod commands;
pub mod config;
pub mod logging;
pub mod progress;
pub mod types;
