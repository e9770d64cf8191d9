//! Error types for ontology acquisition and parsing.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that make the ontology source unavailable.
#[derive(Debug, Error)]
pub enum IngestError {
    // === Acquisition Errors ===
    /// Download failed or returned a non-success status.
    #[error("failed to fetch {url}: {message}")]
    Network { url: String, message: String },

    /// Local file could not be read.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Parsing Errors ===
    /// Source is not valid UTF-8.
    #[error("invalid UTF-8 in {origin}: {message}")]
    Encoding { origin: String, message: String },

    /// Malformed OBO document.
    #[error("malformed OBO at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Parsed terms do not form a valid graph.
    #[error("invalid ontology: {0}")]
    Model(#[from] hpo_model::ModelError),
}

impl IngestError {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }

    /// Whether retrying later could succeed.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Network { .. })
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
