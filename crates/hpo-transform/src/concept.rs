//! Term to concept mapping.

use hpo_model::{Concept, ConceptProperty, Designation, Ontology, SynonymScope, Term};
use tracing::debug;

use crate::error::Result;

pub const INACTIVE: &str = "inactive";
pub const DEFINITION: &str = "definition";
pub const XREF: &str = "xref";
pub const PARENT: &str = "parent";
pub const CHILD: &str = "child";
pub const SUBSET: &str = "subset";

/// Map one term to its `CodeSystem.concept` entry.
///
/// Properties are appended in a fixed order: `inactive`, `definition`,
/// `xref`, `parent`, `child`, `subset`. Multi-valued properties are sorted
/// by value.
pub fn map_term(ontology: &Ontology, term: &Term) -> Result<Concept> {
    let mut concept = Concept::new(term.id.as_str(), term.name.as_str())?;
    concept.designation = designations(term);
    concept.property = properties(ontology, term)?;
    Ok(concept)
}

fn designations(term: &Term) -> Vec<Designation> {
    let mut designations = Vec::new();
    for synonym in &term.synonyms {
        if synonym.scope == SynonymScope::Exact {
            designations.push(Designation::synonym(synonym.text.as_str()));
        } else {
            debug!(
                code = %term.id,
                scope = %synonym.scope,
                synonym = %synonym.text,
                "skipping non-exact synonym"
            );
        }
    }
    designations
}

fn properties(ontology: &Ontology, term: &Term) -> Result<Vec<ConceptProperty>> {
    let mut properties = vec![ConceptProperty::boolean(INACTIVE, term.obsolete)?];

    if let Some(definition) = term.definition_text() {
        properties.push(ConceptProperty::string(DEFINITION, definition)?);
    }
    for xref in &term.xrefs {
        properties.push(ConceptProperty::string(XREF, xref.as_str())?);
    }
    for parent in ontology.superclasses(&term.id) {
        properties.push(ConceptProperty::code(PARENT, parent.id.as_str())?);
    }
    for dangling in ontology.dangling_parents(&term.id) {
        debug!(code = %term.id, parent = %dangling, "is_a target not in ontology");
    }
    for child in ontology.subclasses(&term.id) {
        properties.push(ConceptProperty::code(CHILD, child.id.as_str())?);
    }
    for subset in &term.subsets {
        properties.push(ConceptProperty::string(SUBSET, subset.as_str())?);
    }
    Ok(properties)
}
