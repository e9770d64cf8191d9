//! Tests for hpo-model types.

use hpo_model::{
    CodeSystem, Concept, ConceptProperty, ContentMode, Designation, HierarchyMeaning, ModelError,
    Ontology, OntologyMetadata, PropertyType, PropertyValue, PublicationStatus, SynonymScope, Term,
    TermId,
};
use serde_json::json;

fn id(value: &str) -> TermId {
    TermId::new(value).expect("valid id")
}

fn small_graph() -> Ontology {
    // A
    // ├── B
    // │   └── D
    // └── C
    //     └── D
    let terms = vec![
        Term::new(id("X:A"), "A"),
        Term::new(id("X:B"), "B").with_parent(id("X:A")),
        Term::new(id("X:C"), "C").with_parent(id("X:A")),
        Term::new(id("X:D"), "D")
            .with_parent(id("X:C"))
            .with_parent(id("X:B"))
            .with_parent(id("X:MISSING")),
    ];
    Ontology::new(OntologyMetadata::default(), terms).expect("build ontology")
}

fn ids(terms: Vec<&Term>) -> Vec<&str> {
    terms.into_iter().map(|term| term.id.as_str()).collect()
}

#[test]
fn terms_keep_source_order() {
    let ontology = small_graph();
    let order: Vec<&str> = ontology.terms().map(|term| term.id.as_str()).collect();
    assert_eq!(order, vec!["X:A", "X:B", "X:C", "X:D"]);
    assert_eq!(ontology.len(), 4);
}

#[test]
fn direct_superclasses_are_sorted_and_resolved() {
    let ontology = small_graph();
    assert_eq!(ids(ontology.superclasses(&id("X:D"))), vec!["X:B", "X:C"]);
    assert!(ontology.superclasses(&id("X:A")).is_empty());
    assert_eq!(
        ontology.dangling_parents(&id("X:D")),
        vec![&id("X:MISSING")]
    );
}

#[test]
fn direct_subclasses_exclude_grandchildren() {
    let ontology = small_graph();
    assert_eq!(ids(ontology.subclasses(&id("X:A"))), vec!["X:B", "X:C"]);
    assert_eq!(ids(ontology.subclasses(&id("X:B"))), vec!["X:D"]);
    assert!(ontology.subclasses(&id("X:D")).is_empty());
}

#[test]
fn roots_have_no_resolvable_parent() {
    let ontology = small_graph();
    let roots: Vec<&str> = ontology.roots().map(|term| term.id.as_str()).collect();
    assert_eq!(roots, vec!["X:A"]);
}

#[test]
fn duplicate_ids_are_rejected() {
    let terms = vec![Term::new(id("X:1"), "one"), Term::new(id("X:1"), "again")];
    let err = Ontology::new(OntologyMetadata::default(), terms).unwrap_err();
    assert!(matches!(err, ModelError::DuplicateTerm(ref code) if code == "X:1"));
}

#[test]
fn only_empty_definition_is_not_a_definition() {
    let term = Term::new(id("X:1"), "one").with_definition("");
    assert_eq!(term.definition_text(), None);
    let term = term.with_definition("  ");
    assert_eq!(term.definition_text(), Some("  "));
    let term = term.with_definition("Something.");
    assert_eq!(term.definition_text(), Some("Something."));
}

#[test]
fn synonyms_keep_insertion_order() {
    let term = Term::new(id("X:1"), "one")
        .with_synonym(SynonymScope::Narrow, "b")
        .with_synonym(SynonymScope::Exact, "a");
    let texts: Vec<&str> = term.synonyms.iter().map(|s| s.text.as_str()).collect();
    assert_eq!(texts, vec!["b", "a"]);
}

#[test]
fn property_value_serializes_single_value_element() {
    let inactive = ConceptProperty::boolean("inactive", true).expect("property");
    let parent = ConceptProperty::code("parent", "HP:0000001").expect("property");
    let xref = ConceptProperty::string("xref", "UMLS:C0000001").expect("property");
    assert_eq!(
        serde_json::to_value(&inactive).expect("serialize"),
        json!({"code": "inactive", "valueBoolean": true})
    );
    assert_eq!(
        serde_json::to_value(&parent).expect("serialize"),
        json!({"code": "parent", "valueCode": "HP:0000001"})
    );
    assert_eq!(
        serde_json::to_value(&xref).expect("serialize"),
        json!({"code": "xref", "valueString": "UMLS:C0000001"})
    );
}

#[test]
fn property_value_deserializes_back() {
    let property: ConceptProperty =
        serde_json::from_value(json!({"code": "child", "valueCode": "HP:2"})).expect("parse");
    assert_eq!(property.value, PropertyValue::Code("HP:2".to_string()));
    assert_eq!(property.value.as_str(), Some("HP:2"));
    assert_eq!(property.value.as_bool(), None);
}

#[test]
fn empty_codes_are_rejected() {
    assert!(matches!(Concept::new(" ", "x"), Err(ModelError::EmptyCode)));
    assert!(matches!(
        ConceptProperty::boolean("", false),
        Err(ModelError::EmptyPropertyCode)
    ));
}

#[test]
fn concept_omits_empty_lists() {
    let concept = Concept::new("X:1", "One").expect("concept");
    assert_eq!(
        serde_json::to_value(&concept).expect("serialize"),
        json!({"code": "X:1", "display": "One"})
    );
}

#[test]
fn concept_snapshot() {
    let mut concept = Concept::new("X:001", "Test Phenotype").expect("concept");
    concept.designation.push(Designation::synonym("Test Syn"));
    concept
        .property
        .push(ConceptProperty::boolean("inactive", false).expect("property"));
    insta::assert_json_snapshot!(concept, @r#"
    {
      "code": "X:001",
      "display": "Test Phenotype",
      "designation": [
        {
          "language": "en",
          "use": {
            "system": "http://snomed.info/sct",
            "code": "900000000000013009",
            "display": "Synonym"
          },
          "value": "Test Syn"
        }
      ],
      "property": [
        {
          "code": "inactive",
          "valueBoolean": false
        }
      ]
    }
    "#);
}

#[test]
fn code_system_header_defaults() {
    let code_system = CodeSystem::new("http://example.org/cs", "1.0");
    let value = serde_json::to_value(&code_system).expect("serialize");
    assert_eq!(value["resourceType"], "CodeSystem");
    assert_eq!(value["status"], "active");
    assert_eq!(value["content"], "complete");
    assert_eq!(value["valueSet"], "http://example.org/cs?vs");
    assert_eq!(value["versionNeeded"], false);
    assert!(value.get("hierarchyMeaning").is_none());
    assert!(value.get("property").is_none());
    assert_eq!(value["concept"], json!([]));
}

#[test]
fn enum_codes_use_fhir_spelling() {
    let codes = [
        serde_json::to_value(PropertyType::Code).expect("json"),
        serde_json::to_value(PropertyType::String).expect("json"),
        serde_json::to_value(PropertyType::Boolean).expect("json"),
        serde_json::to_value(HierarchyMeaning::IsA).expect("json"),
        serde_json::to_value(ContentMode::Complete).expect("json"),
        serde_json::to_value(PublicationStatus::Active).expect("json"),
    ];
    assert_eq!(
        codes,
        ["code", "string", "boolean", "is-a", "complete", "active"].map(serde_json::Value::from)
    );
}
