//! Static identity of the generated code system.

use serde::{Deserialize, Serialize};

pub const DEFAULT_URL: &str = "http://purl.obolibrary.org/obo/hp.owl";
pub const DEFAULT_VERSION_BASE: &str = "http://purl.obolibrary.org/obo/hp/";
pub const DEFAULT_VERSION_SUFFIX: &str = "/hp.owl";
pub const DEFAULT_COPYRIGHT: &str =
    "Please see license of HPO at http://www.human-phenotype-ontology.org.";
pub const DEFAULT_PURPOSE: &str = "To provide a standardized vocabulary of human phenotypes \
     encountered in human disease in a FHIR context.";

/// Header values that do not come from the ontology itself.
///
/// Defaults describe the Human Phenotype Ontology.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodeSystemSettings {
    /// Canonical `CodeSystem.url`; the value set url is this plus `?vs`.
    pub url: String,
    pub experimental: bool,
    pub name: String,
    pub title: String,
    /// Prepended to the ontology data-version to form `CodeSystem.version`.
    pub version_base: String,
    /// Appended to the ontology data-version to form `CodeSystem.version`.
    pub version_suffix: String,
    pub copyright: String,
    pub purpose: String,
}

impl Default for CodeSystemSettings {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            experimental: true,
            name: "HPO".to_string(),
            title: "Human Phenotype Ontology".to_string(),
            version_base: DEFAULT_VERSION_BASE.to_string(),
            version_suffix: DEFAULT_VERSION_SUFFIX.to_string(),
            copyright: DEFAULT_COPYRIGHT.to_string(),
            purpose: DEFAULT_PURPOSE.to_string(),
        }
    }
}

impl CodeSystemSettings {
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    #[must_use]
    pub fn with_experimental(mut self, experimental: bool) -> Self {
        self.experimental = experimental;
        self
    }
}
