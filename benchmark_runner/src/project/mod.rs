//!
//! The documentation project inspection.
//!

pub mod config;
pub mod file_kind;
pub mod stats;

use std::path::Path;
use std::path::PathBuf;

///
/// Returns the paths matching `pattern` under `directory`, in traversal order.
///
pub(crate) fn glob_under(directory: &Path, pattern: &str) -> anyhow::Result<Vec<PathBuf>> {
    let full_pattern = format!(
        "{}/{pattern}",
        glob::Pattern::escape(directory.to_string_lossy().as_ref())
    );
    let mut paths = Vec::new();
    for entry in glob::glob(full_pattern.as_str())
        .map_err(|error| anyhow::anyhow!("Pattern `{full_pattern}` parsing: {error}"))?
    {
        paths.push(entry.map_err(|error| anyhow::anyhow!("Directory walking: {error}"))?);
    }
    Ok(paths)
}
