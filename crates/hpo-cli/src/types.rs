use std::collections::BTreeMap;
use std::path::PathBuf;

use hpo_ingest::SourceInfo;
use hpo_model::{Ontology, SynonymScope};

#[derive(Debug)]
pub struct ConvertResult {
    pub source: SourceInfo,
    pub url: String,
    pub version: String,
    pub date: String,
    pub count: usize,
    pub concepts: usize,
    /// `None` for dry runs.
    pub output: Option<PathBuf>,
    pub duration_ms: u128,
}

#[derive(Debug)]
pub struct InspectResult {
    pub source: SourceInfo,
    pub stats: OntologyStats,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OntologyStats {
    pub data_version: Option<String>,
    pub terms: usize,
    pub obsolete: usize,
    pub with_definition: usize,
    pub synonyms: BTreeMap<&'static str, usize>,
    pub xrefs: usize,
    pub subsets: BTreeMap<String, usize>,
    pub roots: Vec<String>,
}

impl OntologyStats {
    pub fn collect(ontology: &Ontology) -> Self {
        let mut stats = Self {
            data_version: ontology.metadata().data_version.clone(),
            terms: ontology.len(),
            ..Self::default()
        };
        for scope in [
            SynonymScope::Exact,
            SynonymScope::Related,
            SynonymScope::Narrow,
            SynonymScope::Broad,
        ] {
            stats.synonyms.insert(scope.as_str(), 0);
        }
        for term in ontology.terms() {
            stats.obsolete += usize::from(term.obsolete);
            stats.with_definition += usize::from(term.definition_text().is_some());
            stats.xrefs += term.xrefs.len();
            for synonym in &term.synonyms {
                *stats.synonyms.entry(synonym.scope.as_str()).or_insert(0) += 1;
            }
            for subset in &term.subsets {
                *stats.subsets.entry(subset.clone()).or_insert(0) += 1;
            }
        }
        stats.roots = ontology
            .roots()
            .filter(|term| !term.obsolete)
            .map(|term| term.id.to_string())
            .collect();
        stats
    }
}
