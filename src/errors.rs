use std::{path::PathBuf, process::ExitStatus};

use thiserror::Error;

/// Error type covering every failure of a generate/compile/view run.
#[derive(Debug, Error)]
pub enum SelfCalcError {
    #[error("IO error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid price: {0} (must be finite and non-negative)")]
    InvalidPrice(f64),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Failed to start compiler `{program}`: {source}")]
    CompilerSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to read compiler output during pass {pass}: {source}")]
    CompilerOutput {
        pass: u32,
        #[source]
        source: std::io::Error,
    },
    #[error("Compiler pass {pass} exited with {status}")]
    CompilerExit { pass: u32, status: ExitStatus },
    #[error("Failed to open {}: {source}", .path.display())]
    ViewerLaunch {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Viewer for {} exited with {status}", .path.display())]
    ViewerExit { path: PathBuf, status: ExitStatus },
}

impl SelfCalcError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = SelfCalcError> = std::result::Result<T, E>;
