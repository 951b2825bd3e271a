//!
//! The fixture documentation project.
//!

pub mod config;

use std::path::Path;
use std::path::PathBuf;

use self::config::Config;

///
/// The fixture documentation project.
///
#[derive(Debug, Clone)]
pub struct Project {
    /// The build configuration.
    pub config: Config,
    /// The pages, as paths relative to the docs directory and their contents.
    pub pages: Vec<(PathBuf, String)>,
}

impl Project {
    /// The build configuration file name.
    pub const CONFIG_FILE_NAME: &'static str = "mkdocs.yml";

    /// The docs directory name.
    pub const DOCS_DIRECTORY: &'static str = "docs";

    /// The build output directory name.
    pub const SITE_DIRECTORY: &'static str = "site";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(config: Config) -> Self {
        Self {
            config,
            pages: Vec::new(),
        }
    }

    ///
    /// Adds a page.
    ///
    pub fn with_page(mut self, path: &str, contents: &str) -> Self {
        self.pages.push((PathBuf::from(path), contents.to_owned()));
        self
    }

    ///
    /// Writes the project into `root`.
    ///
    pub fn write(&self, root: &Path) -> anyhow::Result<()> {
        let config_path = root.join(Self::CONFIG_FILE_NAME);
        std::fs::write(config_path.as_path(), self.config.to_yaml()?).map_err(|error| {
            anyhow::anyhow!("Build configuration {config_path:?} writing: {error}")
        })?;

        let docs_dir = root.join(Self::DOCS_DIRECTORY);
        for (path, contents) in self.pages.iter() {
            let page_path = docs_dir.join(path);
            if let Some(parent) = page_path.parent() {
                std::fs::create_dir_all(parent)
                    .map_err(|error| anyhow::anyhow!("Directory {parent:?} creation: {error}"))?;
            }
            std::fs::write(page_path.as_path(), contents)
                .map_err(|error| anyhow::anyhow!("Page {page_path:?} writing: {error}"))?;
        }

        Ok(())
    }
}
