//!
//! The documentation project statistics.
//!

use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;

use crate::project::config::Features;
use crate::project::file_kind::FileKind;

///
/// The documentation project statistics.
///
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    /// The number of pages, one per markdown file.
    pub total_pages: usize,
    /// The number of markdown files.
    pub markdown_files: usize,
    /// The number of images.
    pub image_files: usize,
    /// The number of stylesheets.
    pub css_files: usize,
    /// The number of scripts.
    pub js_files: usize,
    /// The total size of all files in the docs directory, in megabytes.
    pub total_size_mb: f64,
    /// Whether the configuration mentions plugins.
    pub has_plugins: bool,
    /// Whether the configuration mentions a theme.
    pub has_custom_theme: bool,
}

impl Stats {
    /// The conventional docs directory name.
    pub const DOCS_DIRECTORY: &'static str = "docs";

    ///
    /// Analyzes the project in `project_dir`.
    ///
    /// Files are counted in `<project_dir>/docs`, or in the first directory named
    /// `docs` found below the project if the former does not exist.
    ///
    pub fn analyze(project_dir: &Path) -> anyhow::Result<Self> {
        let mut stats = Self::default();

        if let Some(docs_dir) = Self::find_docs_directory(project_dir)? {
            for path in super::glob_under(docs_dir.as_path(), "**/*")? {
                if !path.is_file() {
                    continue;
                }

                let size = std::fs::metadata(path.as_path())
                    .map_err(|error| anyhow::anyhow!("File {path:?} metadata: {error}"))?
                    .len();
                stats.total_size_mb += crate::util::bytes_to_megabytes(size);

                match FileKind::classify(path.as_path()) {
                    Some(FileKind::Markdown) => {
                        stats.markdown_files += 1;
                        stats.total_pages += 1;
                    }
                    Some(FileKind::Image) => stats.image_files += 1,
                    Some(FileKind::Stylesheet) => stats.css_files += 1,
                    Some(FileKind::Script) => stats.js_files += 1,
                    None => {}
                }
            }
        }

        if let Some(config_path) = super::config::find_direct(project_dir) {
            let text = std::fs::read_to_string(config_path.as_path()).map_err(|error| {
                anyhow::anyhow!("Build configuration {config_path:?} reading: {error}")
            })?;
            let features = Features::scan(text.as_str());
            stats.has_plugins = features.has_plugins;
            stats.has_custom_theme = features.has_custom_theme;
        }

        Ok(stats)
    }

    ///
    /// Returns the docs directory of the project, if any.
    ///
    fn find_docs_directory(project_dir: &Path) -> anyhow::Result<Option<PathBuf>> {
        let docs_dir = project_dir.join(Self::DOCS_DIRECTORY);
        if docs_dir.is_dir() {
            return Ok(Some(docs_dir));
        }

        Ok(
            super::glob_under(project_dir, format!("**/{}", Self::DOCS_DIRECTORY).as_str())?
                .into_iter()
                .find(|path| path.is_dir()),
        )
    }
}
