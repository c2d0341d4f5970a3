//! Two-pass invocation of the external typesetting engine.

mod process;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::Result;

pub use process::{OutputSink, ProcessRunner};

/// Number of engine runs needed for the table continuation to settle.
pub const COMPILE_PASSES: u32 = 2;

pub const DEFAULT_PROGRAM: &str = "lualatex";
pub const ARTIFACT_EXTENSION: &str = "pdf";

/// Program and leading arguments used to compile the document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompilerSettings {
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl Default for CompilerSettings {
    fn default() -> Self {
        Self {
            program: DEFAULT_PROGRAM.into(),
            args: vec!["-interaction=nonstopmode".into()],
        }
    }
}

/// Runs a single compilation pass to completion.
pub trait PassRunner {
    fn run_pass(&mut self, pass: u32, work_dir: &Path, source: &Path) -> Result<()>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileReport {
    pub passes: u32,
    pub artifact: PathBuf,
}

/// Compiled output path for `source`.
pub fn artifact_path(source: &Path) -> PathBuf {
    source.with_extension(ARTIFACT_EXTENSION)
}

/// Drives [`COMPILE_PASSES`] sequential passes through a [`PassRunner`].
///
/// The artifact itself is not inspected; success means every pass exited
/// cleanly.
pub fn compile(
    runner: &mut dyn PassRunner,
    work_dir: &Path,
    source: &Path,
) -> Result<CompileReport> {
    for pass in 1..=COMPILE_PASSES {
        tracing::info!(pass, source = %source.display(), "compiler pass starting");
        runner.run_pass(pass, work_dir, source)?;
        tracing::debug!(pass, "compiler pass finished");
    }
    Ok(CompileReport {
        passes: COMPILE_PASSES,
        artifact: artifact_path(source),
    })
}
