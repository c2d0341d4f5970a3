//! Generate → emit → compile → view, each stage run once.

use std::{env, fs, path::PathBuf};

use crate::{
    compiler::{self, PassRunner, ProcessRunner},
    config::Config,
    document,
    errors::{Result, SelfCalcError},
    items::{generate_items_with_thread_rng, LineItem},
    viewer::{default_viewer, ArtifactViewer, ViewOutcome},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub source: PathBuf,
    pub artifact: PathBuf,
    pub item_count: usize,
    pub passes: u32,
    pub view: ViewOutcome,
}

/// Runs the fixed scenario with randomly priced items, the configured engine
/// and the host's viewer.
pub fn run(config: &Config) -> Result<RunReport> {
    let items = generate_items_with_thread_rng(config.item_count, &config.description);
    let mut runner = ProcessRunner::new(config.compiler.clone());
    let viewer = default_viewer();
    run_with(config, &items, &mut runner, viewer.as_ref())
}

/// Runs the pipeline for `items` with explicit compiler and viewer stages.
///
/// A failing stage aborts every later one.
pub fn run_with(
    config: &Config,
    items: &[LineItem],
    runner: &mut dyn PassRunner,
    viewer: &dyn ArtifactViewer,
) -> Result<RunReport> {
    let requested_dir = config.output_dir();
    fs::create_dir_all(&requested_dir).map_err(|err| SelfCalcError::io(&requested_dir, err))?;
    // The engine runs inside this directory, so the source path handed to it
    // has to stay valid from there.
    let work_dir = if requested_dir.is_absolute() {
        requested_dir
    } else {
        let cwd = env::current_dir().map_err(|err| SelfCalcError::io(".", err))?;
        cwd.join(requested_dir)
    };
    let source = work_dir.join(config.source_file_name());

    tracing::info!(rows = items.len(), path = %source.display(), "writing document");
    document::write_document(&source, items, &config.document_options())?;

    let report = compiler::compile(runner, &work_dir, &source)?;

    let view = if config.open_viewer {
        viewer.open(&report.artifact)?
    } else {
        ViewOutcome::Disabled
    };
    tracing::info!(artifact = %report.artifact.display(), ?view, "run complete");

    Ok(RunReport {
        source,
        artifact: report.artifact,
        item_count: items.len(),
        passes: report.passes,
        view,
    })
}
