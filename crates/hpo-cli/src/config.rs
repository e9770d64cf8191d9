//! Conversion settings.
//!
//! Values come from the built-in defaults, optionally replaced by a TOML file
//! (`--config`), then by individual command line flags.
//!
//! ```toml
//! fetch = true
//! source_url = "http://purl.obolibrary.org/obo/hp.obo"
//! output = "out/hp.json"
//!
//! [codesystem]
//! url = "http://purl.obolibrary.org/obo/hp.owl"
//! experimental = false
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use hpo_ingest::SourceLocator;
use hpo_transform::CodeSystemSettings;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SOURCE_URL: &str = "http://purl.obolibrary.org/obo/hp.obo";
pub const DEFAULT_SOURCE_PATH: &str = "hp.obo";
pub const DEFAULT_OUTPUT: &str = "hp.obo.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConvertConfig {
    /// Download location used when `fetch` is set.
    pub source_url: String,
    /// Local file used when `fetch` is not set.
    pub source_path: PathBuf,
    pub fetch: bool,
    pub output: PathBuf,
    pub codesystem: CodeSystemSettings,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_SOURCE_URL.to_string(),
            source_path: PathBuf::from(DEFAULT_SOURCE_PATH),
            fetch: false,
            output: PathBuf::from(DEFAULT_OUTPUT),
            codesystem: CodeSystemSettings::default(),
        }
    }
}

impl ConvertConfig {
    /// Load a TOML config file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("parse config {}", path.display()))
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Defaults, or the given file when present.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn locator(&self) -> SourceLocator {
        SourceLocator::select(self.fetch, &self.source_url, &self.source_path)
    }
}
