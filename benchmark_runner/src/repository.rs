//!
//! The benchmarked repository description.
//!

use std::path::Path;

use serde::Deserialize;
use serde::Serialize;

///
/// The benchmarked repository description.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    /// The clone URL.
    pub url: String,
    /// The display name.
    pub name: String,
    /// The cloned branch.
    #[serde(default = "Repository::default_branch")]
    pub branch: String,
}

impl Repository {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(url: String, name: String, branch: String) -> Self {
        Self { url, name, branch }
    }

    ///
    /// Reads the list of repositories from a JSON file.
    ///
    pub fn read_list(path: &Path) -> anyhow::Result<Vec<Self>> {
        let text = std::fs::read_to_string(path)
            .map_err(|error| anyhow::anyhow!("Repositories file {path:?} reading: {error}"))?;
        let repositories: Vec<Self> = serde_json::from_str(text.as_str())
            .map_err(|error| anyhow::anyhow!("Repositories file {path:?} parsing: {error}"))?;
        Ok(repositories)
    }

    ///
    /// The branch used when none is specified.
    ///
    fn default_branch() -> String {
        "main".to_owned()
    }
}
