//!
//! The build configuration file discovery and scanning.
//!

use std::path::Path;
use std::path::PathBuf;

use crate::CONFIG_FILE_NAMES;

///
/// Finds the build configuration file anywhere under `directory`.
///
/// The shallowest match wins, ties are broken by traversal order.
///
pub fn find(directory: &Path) -> anyhow::Result<Option<PathBuf>> {
    let mut candidates = Vec::new();
    for name in CONFIG_FILE_NAMES.iter() {
        candidates.extend(
            super::glob_under(directory, format!("**/{name}").as_str())?
                .into_iter()
                .filter(|path| path.is_file()),
        );
    }

    Ok(candidates
        .into_iter()
        .enumerate()
        .min_by_key(|(index, path)| (path.components().count(), *index))
        .map(|(_, path)| path))
}

///
/// Finds the build configuration file directly inside `directory`.
///
pub fn find_direct(directory: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| directory.join(name))
        .find(|path| path.is_file())
}

///
/// The features detected in the build configuration text.
///
/// This is a substring presence check, not a YAML parse: commented-out or
/// nested keys are reported as well.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Features {
    /// Whether a `plugins:` key is present.
    pub has_plugins: bool,
    /// Whether a `theme:` key is present.
    pub has_custom_theme: bool,
}

impl Features {
    ///
    /// Scans the configuration text.
    ///
    pub fn scan(text: &str) -> Self {
        Self {
            has_plugins: text.contains("plugins:"),
            has_custom_theme: text.contains("theme:"),
        }
    }
}
