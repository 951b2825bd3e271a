//!
//! The per-repository benchmark errors.
//!

use std::process::ExitStatus;

///
/// The per-repository benchmark errors.
///
/// Each of them skips the repository without aborting the batch.
///
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// The temporary working directory cannot be created.
    #[error("temporary directory creation: {0}")]
    TemporaryDirectory(std::io::Error),
    /// The `git` executable cannot be started.
    #[error("`git clone` spawning: {0}")]
    CloneSpawn(std::io::Error),
    /// The clone command failed.
    #[error("`git clone` failed with {status}: {stderr}")]
    Clone {
        /// The exit status.
        status: ExitStatus,
        /// The beginning of the error output.
        stderr: String,
    },
    /// No build configuration file in the cloned tree.
    #[error("no `mkdocs.yml` or `mkdocs.yaml` found")]
    ConfigNotFound,
    /// The project tree cannot be analyzed.
    #[error("project analysis: {0}")]
    Analysis(anyhow::Error),
    /// The build command cannot be run.
    #[error("build tests: {0}")]
    Build(anyhow::Error),
}
