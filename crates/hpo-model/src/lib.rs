//! Data model shared by the HPO to FHIR conversion crates.
//!
//! [`ontology`] holds the read-only term graph produced by the ontology
//! provider; [`codesystem`] holds the FHIR `CodeSystem` resource built from it.

pub mod codesystem;
pub mod error;
pub mod ontology;

pub use codesystem::{
    CodeSystem, Coding, Concept, ConceptProperty, ContentMode, Designation, HierarchyMeaning,
    PropertyDefinition, PropertyType, PropertyValue, PublicationStatus, SNOMED_SYSTEM, SYNONYM_USE,
};
pub use error::{ModelError, Result};
pub use ontology::{Ontology, OntologyMetadata, Synonym, SynonymScope, Term, TermId};
