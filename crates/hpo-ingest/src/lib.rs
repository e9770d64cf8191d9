//! Ontology provider for the HPO to FHIR converter.
//!
//! Resolves a [`SourceLocator`] to raw bytes (HTTP download or local file)
//! and parses the OBO 1.4 flat file format into an [`hpo_model::Ontology`].
//!
//! # Example
//!
//! ```ignore
//! use hpo_ingest::{SourceLocator, load_ontology};
//!
//! let loaded = load_ontology(&SourceLocator::path("hp.obo"))?;
//! println!("{} terms, sha256 {}", loaded.ontology.len(), loaded.source.sha256);
//! ```

mod error;
mod obo;
mod source;

// === Error Types ===
pub use error::{IngestError, Result};

// === Parsing ===
pub use obo::parse_obo;

// === Acquisition ===
pub use source::{SourceBytes, SourceLocator, compute_sha256, read_source};

use hpo_model::Ontology;
use tracing::info;

/// A parsed ontology together with provenance of the bytes it came from.
#[derive(Debug)]
pub struct LoadedOntology {
    pub ontology: Ontology,
    pub source: SourceInfo,
}

/// Where the ontology came from.
#[derive(Debug, Clone)]
pub struct SourceInfo {
    pub locator: SourceLocator,
    pub bytes: usize,
    pub sha256: String,
}

/// Read and parse the ontology behind `locator`.
pub fn load_ontology(locator: &SourceLocator) -> Result<LoadedOntology> {
    let source = read_source(locator)?;
    let text = String::from_utf8(source.data).map_err(|err| IngestError::Encoding {
        origin: locator.to_string(),
        message: err.utf8_error().to_string(),
    })?;
    let ontology = parse_obo(&text)?;
    info!(
        source = %locator,
        term_count = ontology.len(),
        data_version = ontology.metadata().data_version.as_deref().unwrap_or("-"),
        "ontology loaded"
    );
    Ok(LoadedOntology {
        ontology,
        source: SourceInfo {
            locator: locator.clone(),
            bytes: text.len(),
            sha256: source.sha256,
        },
    })
}
