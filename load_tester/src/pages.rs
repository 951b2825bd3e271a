//!
//! The documentation site pages visited by virtual users.
//!

use std::path::Path;

///
/// The documentation site pages visited by virtual users.
///
/// Paths are normalized to start with `/`, so they resolve against the host root.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pages {
    /// The normalized page paths.
    paths: Vec<String>,
}

impl Pages {
    /// The pages of the documentation site served during development.
    pub const DEFAULT: [&'static str; 7] = [
        "/",
        "/getting-started/",
        "/nugets/",
        "/nethereum-managed-accounts/",
        "/nethereum-creating-a-new-account-using-geth/",
        "/contracts/deploying/",
        "/unity3d-smartcontracts-getting-started/",
    ];

    ///
    /// A shortcut constructor.
    ///
    pub fn new(paths: Vec<String>) -> anyhow::Result<Self> {
        if paths.is_empty() {
            anyhow::bail!("The page list must not be empty");
        }

        Ok(Self {
            paths: paths
                .into_iter()
                .map(|path| Self::normalize(path.trim()))
                .collect(),
        })
    }

    ///
    /// Returns the page at `index`.
    ///
    pub fn get(&self, index: usize) -> Option<&str> {
        self.paths.get(index).map(String::as_str)
    }

    ///
    /// Returns the number of pages.
    ///
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    ///
    /// Whether there are no pages. Always `false` for validated lists.
    ///
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    ///
    /// Returns the page paths.
    ///
    pub fn as_slice(&self) -> &[String] {
        self.paths.as_slice()
    }

    ///
    /// Returns the list without `path`, or `None` if nothing else remains.
    ///
    pub fn without(&self, path: &str) -> Option<Self> {
        let paths: Vec<String> = self
            .paths
            .iter()
            .filter(|element| element.as_str() != path)
            .cloned()
            .collect();
        if paths.is_empty() {
            return None;
        }
        Some(Self { paths })
    }

    ///
    /// Prefixes the path with `/` if it is relative.
    ///
    fn normalize(path: &str) -> String {
        if path.starts_with('/') {
            path.to_owned()
        } else {
            format!("/{path}")
        }
    }
}

impl Default for Pages {
    fn default() -> Self {
        Self {
            paths: Self::DEFAULT.iter().map(|path| path.to_string()).collect(),
        }
    }
}

impl TryFrom<&Path> for Pages {
    type Error = anyhow::Error;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let text = std::fs::read_to_string(path)
            .map_err(|error| anyhow::anyhow!("Pages file {path:?} reading: {error}"))?;
        let paths: Vec<String> = serde_json::from_str(text.as_str())
            .map_err(|error| anyhow::anyhow!("Pages file {path:?} parsing: {error}"))?;
        Self::new(paths)
    }
}

#[cfg(test)]
mod tests {
    use super::Pages;

    #[test]
    fn default() {
        let pages = Pages::default();
        assert_eq!(pages.len(), Pages::DEFAULT.len());
        assert_eq!(pages.get(0), Some("/"));
        assert_eq!(pages.get(Pages::DEFAULT.len()), None);
    }

    #[test]
    fn normalized() {
        let pages = Pages::new(vec![
            "contracts/deploying/".to_owned(),
            " /nugets/ ".to_owned(),
        ])
        .expect("Valid pages");

        assert_eq!(pages.get(0), Some("/contracts/deploying/"));
        assert_eq!(pages.get(1), Some("/nugets/"));
    }

    #[test]
    fn without() {
        let pages = Pages::default().without("/").expect("Pages remain");
        assert_eq!(pages.len(), Pages::DEFAULT.len() - 1);
        assert!(!pages.as_slice().contains(&"/".to_owned()));

        let root_only = Pages::new(vec!["/".to_owned()]).expect("Valid pages");
        assert_eq!(root_only.without("/"), None);
    }

    #[test]
    fn error_empty() {
        assert!(Pages::new(vec![]).is_err());
    }

    #[test]
    fn from_file() {
        let directory = tempfile::tempdir().expect("Temporary directory creation");
        let path = directory.path().join("pages.json");
        std::fs::write(path.as_path(), r#"["/", "about/"]"#).expect("Pages file writing");

        let pages = Pages::try_from(path.as_path()).expect("Valid pages file");
        assert_eq!(pages.as_slice(), ["/".to_owned(), "/about/".to_owned()]);
    }
}
