//! Property-based checks of the transformation invariants.

use std::collections::BTreeSet;

use hpo_model::{Ontology, OntologyMetadata, PropertyValue, SynonymScope, Term, TermId};
use hpo_transform::{CodeSystemSettings, NoopObserver, transform};
use proptest::prelude::*;

#[derive(Debug, Clone)]
struct TermShape {
    obsolete: bool,
    definition: Option<String>,
    exact_synonyms: usize,
    other_synonyms: usize,
    parents: Vec<usize>,
}

fn term_shape() -> impl Strategy<Value = TermShape> {
    (
        any::<bool>(),
        proptest::option::of("[a-z ]{0,12}"),
        0usize..3,
        0usize..3,
        proptest::collection::vec(any::<usize>(), 0..4),
    )
        .prop_map(
            |(obsolete, definition, exact_synonyms, other_synonyms, parents)| TermShape {
                obsolete,
                definition,
                exact_synonyms,
                other_synonyms,
                parents,
            },
        )
}

fn term_id(index: usize) -> TermId {
    TermId::new(format!("T:{index:04}")).expect("valid id")
}

/// Parents only point at earlier terms, which keeps the graph acyclic.
fn build(shapes: &[TermShape]) -> Ontology {
    let terms = shapes
        .iter()
        .enumerate()
        .map(|(index, shape)| {
            let mut term = Term::new(term_id(index), format!("term {index}"))
                .with_obsolete(shape.obsolete);
            term.definition = shape.definition.clone();
            for n in 0..shape.exact_synonyms {
                term = term.with_synonym(SynonymScope::Exact, format!("exact {n}"));
            }
            for n in 0..shape.other_synonyms {
                term = term.with_synonym(SynonymScope::Broad, format!("broad {n}"));
            }
            if index > 0 {
                for parent in &shape.parents {
                    term = term.with_parent(term_id(parent % index));
                }
            }
            term
        })
        .collect();
    let metadata = OntologyMetadata {
        data_version: Some("t/releases/2024-01-01".to_string()),
        ..OntologyMetadata::default()
    };
    Ontology::new(metadata, terms).expect("ontology")
}

proptest! {
    #[test]
    fn concepts_mirror_terms(shapes in proptest::collection::vec(term_shape(), 0..40)) {
        let ontology = build(&shapes);
        let code_system = transform(&ontology, &CodeSystemSettings::default(), &mut NoopObserver)
            .expect("transform");

        prop_assert_eq!(code_system.count, shapes.len());
        prop_assert_eq!(code_system.concept.len(), shapes.len());

        let mut seen = BTreeSet::new();
        for (index, (term, concept)) in ontology.terms().zip(&code_system.concept).enumerate() {
            prop_assert_eq!(&concept.code, term.id.as_str());
            prop_assert!(seen.insert(concept.code.clone()));

            let inactive: Vec<PropertyValue> = concept.properties("inactive").cloned().collect();
            prop_assert_eq!(inactive, vec![PropertyValue::Boolean(shapes[index].obsolete)]);

            let definitions = concept.properties("definition").count();
            let expected = usize::from(term.definition_text().is_some());
            prop_assert_eq!(definitions, expected);

            prop_assert_eq!(concept.designation.len(), shapes[index].exact_synonyms);

            let parents = concept.properties("parent").count();
            prop_assert_eq!(parents, ontology.superclasses(&term.id).len());
            prop_assert_eq!(parents, term.is_a.len());

            let children = concept.properties("child").count();
            prop_assert_eq!(children, ontology.subclasses(&term.id).len());
        }
    }
}
