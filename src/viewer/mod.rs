//! Opening the compiled artifact with the host's default handler.
//!
//! Only Windows has a launcher; every other host gets [`NoopViewer`].

use std::path::Path;

use crate::errors::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewOutcome {
    Opened,
    /// The artifact was not produced, so nothing was launched.
    Missing,
    Unsupported,
    Disabled,
}

/// Capability to show a finished artifact to the user.
pub trait ArtifactViewer {
    fn open(&self, artifact: &Path) -> Result<ViewOutcome>;
}

/// Viewer for hosts without a supported launcher.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopViewer;

impl ArtifactViewer for NoopViewer {
    fn open(&self, artifact: &Path) -> Result<ViewOutcome> {
        tracing::debug!(path = %artifact.display(), "no viewer on this platform");
        Ok(ViewOutcome::Unsupported)
    }
}

#[cfg(windows)]
pub use shell::ShellViewer;

#[cfg(windows)]
mod shell {
    use std::{path::Path, process::Command};

    use super::{ArtifactViewer, ViewOutcome};
    use crate::errors::{Result, SelfCalcError};

    /// Hands the artifact to the shell's registered file handler.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct ShellViewer;

    impl ArtifactViewer for ShellViewer {
        fn open(&self, artifact: &Path) -> Result<ViewOutcome> {
            if !artifact.exists() {
                tracing::warn!(path = %artifact.display(), "artifact missing, not opening");
                return Ok(ViewOutcome::Missing);
            }
            let status = Command::new("rundll32")
                .arg("url.dll,FileProtocolHandler")
                .arg(artifact)
                .status()
                .map_err(|source| SelfCalcError::ViewerLaunch {
                    path: artifact.to_path_buf(),
                    source,
                })?;
            if !status.success() {
                return Err(SelfCalcError::ViewerExit {
                    path: artifact.to_path_buf(),
                    status,
                });
            }
            Ok(ViewOutcome::Opened)
        }
    }
}

/// Viewer appropriate for the current host.
pub fn default_viewer() -> Box<dyn ArtifactViewer> {
    #[cfg(windows)]
    {
        Box::new(ShellViewer)
    }
    #[cfg(not(windows))]
    {
        Box::new(NoopViewer)
    }
}
