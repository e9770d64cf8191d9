//! Document assembly: header first, then one concept per term.

use hpo_model::{CodeSystem, Ontology};
use tracing::{debug, info, info_span, warn};

use crate::concept::map_term;
use crate::error::Result;
use crate::header::build_header;
use crate::settings::CodeSystemSettings;

/// Receives progress notifications while concepts are built.
///
/// All methods default to doing nothing.
pub trait ProgressObserver {
    /// Called once before the first term, with the number of terms.
    fn on_start(&mut self, _total: usize) {}

    /// Called after the concept at `index` (zero-based) was appended.
    fn on_concept(&mut self, _index: usize, _code: &str) {}

    /// Called once after the last term, with the number of concepts built.
    fn on_finish(&mut self, _count: usize) {}
}

/// Observer that ignores every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ProgressObserver for NoopObserver {}

/// Convert the whole ontology into a `CodeSystem`.
///
/// Concepts follow the ontology's term order. No term is skipped.
pub fn transform<O>(
    ontology: &Ontology,
    settings: &CodeSystemSettings,
    observer: &mut O,
) -> Result<CodeSystem>
where
    O: ProgressObserver + ?Sized,
{
    let span = info_span!("transform", url = %settings.url);
    let _guard = span.enter();

    let mut code_system = build_header(ontology, settings)?;
    info!(
        url = %code_system.url,
        version = %code_system.version,
        count = code_system.count,
        "code system header built"
    );

    observer.on_start(ontology.len());
    code_system.concept.reserve(ontology.len());
    for (index, term) in ontology.terms().enumerate() {
        let concept = map_term(ontology, term)?;
        debug!(code = %concept.code, "concept added");
        observer.on_concept(index, &concept.code);
        code_system.concept.push(concept);
    }
    observer.on_finish(code_system.concept.len());

    if code_system.concept.len() != code_system.count {
        warn!(
            count = code_system.count,
            concepts = code_system.concept.len(),
            "concept count differs from header count"
        );
    }
    info!(
        concepts = code_system.concept.len(),
        "concepts added to code system"
    );
    Ok(code_system)
}
