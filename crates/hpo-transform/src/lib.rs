//! Ontology to FHIR `CodeSystem` transformation.
//!
//! This crate holds the mapping rules of the converter:
//!
//! - **header**: `CodeSystem` metadata from ontology metadata and settings
//! - **concept**: one `CodeSystem.concept` per ontology term
//! - **assemble**: drives term iteration and progress reporting
//! - **settings**: static code system identity (url, name, texts)

pub mod assemble;
pub mod concept;
pub mod error;
pub mod header;
pub mod settings;

pub use assemble::{NoopObserver, ProgressObserver, transform};
pub use concept::map_term;
pub use error::{Result, TransformError};
pub use header::{build_header, derive_date, property_definitions};
pub use settings::CodeSystemSettings;
