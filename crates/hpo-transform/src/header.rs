//! `CodeSystem` header population.

use hpo_model::{CodeSystem, HierarchyMeaning, Ontology, PropertyDefinition, PropertyType};

use crate::concept::{CHILD, DEFINITION, INACTIVE, PARENT, SUBSET, XREF};
use crate::error::{Result, TransformError};
use crate::settings::CodeSystemSettings;

const CONCEPT_PROPERTIES_URI: &str = "http://hl7.org/fhir/concept-properties";

/// Build the header of the code system. Concepts are left empty.
///
/// `count` is the number of terms in the ontology at this point; it is not
/// reconciled with the concepts added later.
pub fn build_header(ontology: &Ontology, settings: &CodeSystemSettings) -> Result<CodeSystem> {
    let data_version = ontology
        .metadata()
        .data_version
        .as_deref()
        .ok_or(TransformError::MissingVersion)?;

    let version = format!(
        "{}{}{}",
        settings.version_base, data_version, settings.version_suffix
    );
    let mut code_system = CodeSystem::new(&settings.url, version);
    code_system.name = settings.name.clone();
    code_system.title = settings.title.clone();
    code_system.experimental = settings.experimental;
    code_system.copyright = settings.copyright.clone();
    code_system.purpose = settings.purpose.clone();
    code_system.date = derive_date(data_version).to_string();
    code_system.count = ontology.len();
    code_system.hierarchy_meaning = Some(HierarchyMeaning::IsA);
    code_system.property = property_definitions();
    Ok(code_system)
}

/// Last `/`-separated segment of the data-version token.
///
/// `hp/releases/2024-01-01` yields `2024-01-01`; a token without `/` is
/// returned whole. A token ending in a file name yields that file name.
pub fn derive_date(data_version: &str) -> &str {
    data_version.rsplit('/').next().unwrap_or(data_version)
}

/// Declarations for every property code a concept can carry.
pub fn property_definitions() -> Vec<PropertyDefinition> {
    let hl7 = |code: &str| Some(format!("{CONCEPT_PROPERTIES_URI}#{code}"));
    vec![
        PropertyDefinition {
            code: INACTIVE.to_string(),
            uri: hl7(INACTIVE),
            description: Some("True if the term is obsolete".to_string()),
            kind: PropertyType::Boolean,
        },
        PropertyDefinition {
            code: DEFINITION.to_string(),
            uri: None,
            description: Some("Textual definition of the term".to_string()),
            kind: PropertyType::String,
        },
        PropertyDefinition {
            code: XREF.to_string(),
            uri: None,
            description: Some("Cross-reference to another vocabulary".to_string()),
            kind: PropertyType::String,
        },
        PropertyDefinition {
            code: PARENT.to_string(),
            uri: hl7(PARENT),
            description: Some("Direct superclass".to_string()),
            kind: PropertyType::Code,
        },
        PropertyDefinition {
            code: CHILD.to_string(),
            uri: hl7(CHILD),
            description: Some("Direct subclass".to_string()),
            kind: PropertyType::Code,
        },
        PropertyDefinition {
            code: SUBSET.to_string(),
            uri: None,
            description: Some("Subset the term belongs to".to_string()),
            kind: PropertyType::String,
        },
    ]
}
