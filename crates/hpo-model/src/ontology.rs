#![deny(unsafe_code)]

//! In-memory ontology term graph.
//!
//! The graph is built once by the ontology provider and is read-only
//! afterwards. Terms keep the order in which they appear in the source.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Stable term identifier, e.g. `HP:0000118`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TermId(String);

impl TermId {
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ModelError::InvalidTermId(value));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TermId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for TermId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

/// How closely a synonym matches the term's canonical meaning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SynonymScope {
    Exact,
    /// OBO default when a synonym line carries no scope.
    #[default]
    Related,
    Narrow,
    Broad,
}

impl SynonymScope {
    /// Parse an OBO scope keyword. Returns `None` for anything unrecognized.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "EXACT" => Some(Self::Exact),
            "RELATED" => Some(Self::Related),
            "NARROW" => Some(Self::Narrow),
            "BROAD" => Some(Self::Broad),
            _ => None,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Exact => "EXACT",
            Self::Related => "RELATED",
            Self::Narrow => "NARROW",
            Self::Broad => "BROAD",
        }
    }
}

impl fmt::Display for SynonymScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Synonym {
    pub scope: SynonymScope,
    pub text: String,
}

impl Synonym {
    pub fn new(scope: SynonymScope, text: impl Into<String>) -> Self {
        Self {
            scope,
            text: text.into(),
        }
    }
}

/// One node of the ontology graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    pub id: TermId,
    pub name: String,
    pub obsolete: bool,
    pub definition: Option<String>,
    /// Source order is preserved.
    pub synonyms: Vec<Synonym>,
    pub xrefs: BTreeSet<String>,
    pub subsets: BTreeSet<String>,
    /// Direct `is_a` targets as written in the source.
    pub is_a: BTreeSet<TermId>,
}

impl Term {
    pub fn new(id: TermId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            obsolete: false,
            definition: None,
            synonyms: Vec::new(),
            xrefs: BTreeSet::new(),
            subsets: BTreeSet::new(),
            is_a: BTreeSet::new(),
        }
    }

    #[must_use]
    pub fn with_obsolete(mut self, obsolete: bool) -> Self {
        self.obsolete = obsolete;
        self
    }

    #[must_use]
    pub fn with_definition(mut self, definition: impl Into<String>) -> Self {
        self.definition = Some(definition.into());
        self
    }

    #[must_use]
    pub fn with_synonym(mut self, scope: SynonymScope, text: impl Into<String>) -> Self {
        self.synonyms.push(Synonym::new(scope, text));
        self
    }

    #[must_use]
    pub fn with_xref(mut self, xref: impl Into<String>) -> Self {
        self.xrefs.insert(xref.into());
        self
    }

    #[must_use]
    pub fn with_subset(mut self, subset: impl Into<String>) -> Self {
        self.subsets.insert(subset.into());
        self
    }

    #[must_use]
    pub fn with_parent(mut self, parent: TermId) -> Self {
        self.is_a.insert(parent);
        self
    }

    /// Definition text when present and non-empty.
    pub fn definition_text(&self) -> Option<&str> {
        self.definition.as_deref().filter(|text| !text.is_empty())
    }
}

/// Ontology header values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OntologyMetadata {
    pub format_version: Option<String>,
    /// Release token, e.g. `hp/releases/2024-01-01`.
    pub data_version: Option<String>,
    pub ontology: Option<String>,
    pub date: Option<String>,
    pub default_namespace: Option<String>,
    pub remarks: Vec<String>,
}

/// Read-only term graph with direct superclass and subclass lookups.
#[derive(Debug, Clone, Default)]
pub struct Ontology {
    metadata: OntologyMetadata,
    terms: Vec<Term>,
    index: BTreeMap<TermId, usize>,
    subclasses: BTreeMap<TermId, BTreeSet<TermId>>,
}

impl Ontology {
    /// Build the graph, rejecting duplicate term ids.
    pub fn new(metadata: OntologyMetadata, terms: Vec<Term>) -> Result<Self> {
        let mut index = BTreeMap::new();
        for (position, term) in terms.iter().enumerate() {
            if index.insert(term.id.clone(), position).is_some() {
                return Err(ModelError::DuplicateTerm(term.id.to_string()));
            }
        }
        let mut subclasses: BTreeMap<TermId, BTreeSet<TermId>> = BTreeMap::new();
        for term in &terms {
            for parent in &term.is_a {
                if parent == &term.id || !index.contains_key(parent) {
                    continue;
                }
                subclasses
                    .entry(parent.clone())
                    .or_default()
                    .insert(term.id.clone());
            }
        }
        Ok(Self {
            metadata,
            terms,
            index,
            subclasses,
        })
    }

    pub fn metadata(&self) -> &OntologyMetadata {
        &self.metadata
    }

    /// Terms in source order.
    pub fn terms(&self) -> impl ExactSizeIterator<Item = &Term> {
        self.terms.iter()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn get(&self, id: &TermId) -> Option<&Term> {
        self.index.get(id).map(|&position| &self.terms[position])
    }

    pub fn contains(&self, id: &TermId) -> bool {
        self.index.contains_key(id)
    }

    /// Direct superclasses (distance 1, self excluded) sorted by id.
    ///
    /// `is_a` targets that are not defined in this ontology are skipped.
    pub fn superclasses(&self, id: &TermId) -> Vec<&Term> {
        let Some(term) = self.get(id) else {
            return Vec::new();
        };
        term.is_a
            .iter()
            .filter(|parent| *parent != id)
            .filter_map(|parent| self.get(parent))
            .collect()
    }

    /// Direct subclasses (distance 1, self excluded) sorted by id.
    pub fn subclasses(&self, id: &TermId) -> Vec<&Term> {
        self.subclasses
            .get(id)
            .map(|children| children.iter().filter_map(|child| self.get(child)).collect())
            .unwrap_or_default()
    }

    /// `is_a` targets that do not resolve to a term in this ontology.
    pub fn dangling_parents(&self, id: &TermId) -> Vec<&TermId> {
        self.get(id)
            .map(|term| {
                term.is_a
                    .iter()
                    .filter(|parent| *parent != id && !self.contains(parent))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Terms without any resolvable superclass.
    pub fn roots(&self) -> impl Iterator<Item = &Term> {
        self.terms
            .iter()
            .filter(|term| self.superclasses(&term.id).is_empty())
    }
}
