use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use hpo_ingest::{SourceLocator, load_ontology};
use hpo_output::{to_json_string, write_code_system};
use hpo_transform::transform;

use crate::config::ConvertConfig;
use crate::progress::BarObserver;
use crate::types::{ConvertResult, InspectResult, OntologyStats};

/// Options for one conversion run.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub config: ConvertConfig,
    /// Transform and render, but do not write the output file.
    pub dry_run: bool,
    pub show_progress: bool,
}

/// Load the ontology, build the code system, and write it out.
pub fn run_convert(options: &ConvertOptions) -> Result<ConvertResult> {
    let config = &options.config;
    let locator = config.locator();
    let span = info_span!("convert", source = %locator);
    let _guard = span.enter();
    let start = Instant::now();

    let loaded = load_ontology(&locator).with_context(|| format!("load ontology from {locator}"))?;

    let mut observer = BarObserver::new(options.show_progress);
    let code_system = transform(&loaded.ontology, &config.codesystem, &mut observer)
        .context("build code system")?;

    let output = if options.dry_run {
        let rendered = to_json_string(&code_system).context("render code system")?;
        info!(bytes = rendered.len(), "dry run, output not written");
        None
    } else {
        write_code_system(&config.output, &code_system)
            .with_context(|| format!("write {}", config.output.display()))?;
        Some(config.output.clone())
    };

    let duration_ms = start.elapsed().as_millis();
    info!(
        concepts = code_system.concept.len(),
        duration_ms, "conversion complete"
    );
    Ok(ConvertResult {
        source: loaded.source,
        url: code_system.url.clone(),
        version: code_system.version.clone(),
        date: code_system.date.clone(),
        count: code_system.count,
        concepts: code_system.concept.len(),
        output,
        duration_ms,
    })
}

/// Load the ontology and summarize it without converting.
pub fn run_inspect(locator: &SourceLocator) -> Result<InspectResult> {
    let loaded = load_ontology(locator).with_context(|| format!("load ontology from {locator}"))?;
    let stats = OntologyStats::collect(&loaded.ontology);
    Ok(InspectResult {
        source: loaded.source,
        stats,
    })
}
