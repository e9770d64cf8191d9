//! FHIR R4 `CodeSystem` resource model.
//!
//! Only the elements produced by the converter are modelled. Field names
//! serialize to the FHIR JSON element names; empty concept designation and
//! property lists are left out of the output entirely.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// SNOMED CT code system URI.
pub const SNOMED_SYSTEM: &str = "http://snomed.info/sct";
/// SNOMED CT "Synonym" designation use (`900000000000013009`).
pub const SYNONYM_USE: (&str, &str, &str) = (SNOMED_SYSTEM, "900000000000013009", "Synonym");

const RESOURCE_TYPE: &str = "CodeSystem";

fn default_resource_type() -> String {
    RESOURCE_TYPE.to_string()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublicationStatus {
    #[default]
    Active,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentMode {
    #[default]
    Complete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HierarchyMeaning {
    IsA,
}

/// Value types of the properties the converter declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Code,
    String,
    Boolean,
}

/// Declaration of a property that concepts may carry (`CodeSystem.property`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDefinition {
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: PropertyType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coding {
    pub system: String,
    pub code: String,
    pub display: String,
}

impl Coding {
    pub fn new(
        system: impl Into<String>,
        code: impl Into<String>,
        display: impl Into<String>,
    ) -> Self {
        Self {
            system: system.into(),
            code: code.into(),
            display: display.into(),
        }
    }

    /// The SNOMED CT "Synonym" use coding.
    pub fn synonym() -> Self {
        let (system, code, display) = SYNONYM_USE;
        Self::new(system, code, display)
    }
}

/// Alternate label for a concept (`CodeSystem.concept.designation`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Designation {
    pub language: String,
    #[serde(rename = "use")]
    pub use_: Coding,
    pub value: String,
}

impl Designation {
    /// English designation tagged with the Synonym use.
    pub fn synonym(value: impl Into<String>) -> Self {
        Self {
            language: "en".to_string(),
            use_: Coding::synonym(),
            value: value.into(),
        }
    }
}

/// Typed property payload. Exactly one `value[x]` element is serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyValue {
    #[serde(rename = "valueBoolean")]
    Boolean(bool),
    #[serde(rename = "valueString")]
    String(String),
    #[serde(rename = "valueCode")]
    Code(String),
}

impl PropertyValue {
    pub fn kind(&self) -> PropertyType {
        match self {
            Self::Boolean(_) => PropertyType::Boolean,
            Self::String(_) => PropertyType::String,
            Self::Code(_) => PropertyType::Code,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) | Self::Code(value) => Some(value),
            Self::Boolean(_) => None,
        }
    }
}

/// `CodeSystem.concept.property`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptProperty {
    pub code: String,
    #[serde(flatten)]
    pub value: PropertyValue,
}

impl ConceptProperty {
    pub fn new(code: impl Into<String>, value: PropertyValue) -> Result<Self> {
        let code = code.into();
        if code.trim().is_empty() {
            return Err(ModelError::EmptyPropertyCode);
        }
        Ok(Self { code, value })
    }

    pub fn boolean(code: impl Into<String>, value: bool) -> Result<Self> {
        Self::new(code, PropertyValue::Boolean(value))
    }

    pub fn string(code: impl Into<String>, value: impl Into<String>) -> Result<Self> {
        Self::new(code, PropertyValue::String(value.into()))
    }

    pub fn code(code: impl Into<String>, value: impl Into<String>) -> Result<Self> {
        Self::new(code, PropertyValue::Code(value.into()))
    }
}

/// One entry of the code system (`CodeSystem.concept`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Concept {
    pub code: String,
    pub display: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub designation: Vec<Designation>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub property: Vec<ConceptProperty>,
}

impl Concept {
    pub fn new(code: impl Into<String>, display: impl Into<String>) -> Result<Self> {
        let code = code.into();
        if code.trim().is_empty() {
            return Err(ModelError::EmptyCode);
        }
        Ok(Self {
            code,
            display: display.into(),
            designation: Vec::new(),
            property: Vec::new(),
        })
    }

    /// Properties with the given code, in order.
    pub fn properties<'a>(&'a self, code: &'a str) -> impl Iterator<Item = &'a PropertyValue> {
        self.property
            .iter()
            .filter(move |property| property.code == code)
            .map(|property| &property.value)
    }
}

/// FHIR `CodeSystem` resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeSystem {
    #[serde(default = "default_resource_type")]
    pub resource_type: String,
    pub url: String,
    pub version: String,
    pub name: String,
    pub title: String,
    pub status: PublicationStatus,
    pub experimental: bool,
    pub date: String,
    pub purpose: String,
    pub copyright: String,
    pub value_set: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hierarchy_meaning: Option<HierarchyMeaning>,
    pub version_needed: bool,
    pub content: ContentMode,
    pub count: usize,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub property: Vec<PropertyDefinition>,
    #[serde(default)]
    pub concept: Vec<Concept>,
}

impl CodeSystem {
    /// A complete, active code system with no concepts yet.
    pub fn new(url: impl Into<String>, version: impl Into<String>) -> Self {
        let url = url.into();
        Self {
            resource_type: default_resource_type(),
            value_set: format!("{url}?vs"),
            url,
            version: version.into(),
            name: String::new(),
            title: String::new(),
            status: PublicationStatus::Active,
            experimental: false,
            date: String::new(),
            purpose: String::new(),
            copyright: String::new(),
            hierarchy_meaning: None,
            version_needed: false,
            content: ContentMode::Complete,
            count: 0,
            property: Vec::new(),
            concept: Vec::new(),
        }
    }

    pub fn concept(&self, code: &str) -> Option<&Concept> {
        self.concept.iter().find(|concept| concept.code == code)
    }
}
