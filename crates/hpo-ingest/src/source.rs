//! Source acquisition: HTTP download or local file.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;
use sha2::{Digest, Sha256};
use tracing::{debug, info};

use crate::error::{IngestError, Result};

/// User agent string for download requests.
const USER_AGENT_VALUE: &str = concat!("hpo-fhir/", env!("CARGO_PKG_VERSION"));

/// HTTP request timeout. Full HPO releases are tens of megabytes.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(300);

/// Where to read the ontology from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLocator {
    Url(String),
    Path(PathBuf),
}

impl SourceLocator {
    pub fn url(url: impl Into<String>) -> Self {
        Self::Url(url.into())
    }

    pub fn path(path: impl Into<PathBuf>) -> Self {
        Self::Path(path.into())
    }

    /// Pick the URL when `fetch` is set, the local path otherwise.
    pub fn select(fetch: bool, url: &str, path: impl Into<PathBuf>) -> Self {
        if fetch {
            Self::url(url)
        } else {
            Self::path(path)
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Url(_))
    }
}

impl fmt::Display for SourceLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => f.write_str(url),
            Self::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Raw source content with its digest.
#[derive(Debug, Clone)]
pub struct SourceBytes {
    pub data: Vec<u8>,
    pub sha256: String,
}

/// Read the full source into memory.
pub fn read_source(locator: &SourceLocator) -> Result<SourceBytes> {
    let data = match locator {
        SourceLocator::Url(url) => {
            info!(url = %url, "downloading ontology");
            fetch(url)?
        }
        SourceLocator::Path(path) => {
            info!(path = %path.display(), "reading ontology from disk");
            std::fs::read(path).map_err(|source| IngestError::FileRead {
                path: path.clone(),
                source,
            })?
        }
    };
    let sha256 = compute_sha256(&data);
    debug!(bytes = data.len(), sha256 = %sha256, "source read");
    Ok(SourceBytes { data, sha256 })
}

fn fetch(url: &str) -> Result<Vec<u8>> {
    let network = |message: String| IngestError::Network {
        url: url.to_string(),
        message,
    };
    let client = Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|err| network(err.to_string()))?;
    let response = client
        .get(url)
        .header(USER_AGENT, USER_AGENT_VALUE)
        .send()
        .map_err(|err| network(err.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(network(format!("download failed with status {status}")));
    }
    let body = response.bytes().map_err(|err| network(err.to_string()))?;
    info!(url = %url, bytes = body.len(), "download complete");
    Ok(body.to_vec())
}

/// Lowercase hex SHA-256 of `data`.
pub fn compute_sha256(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}
