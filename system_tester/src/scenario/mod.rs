//!
//! The system test scenarios.
//!

pub mod build;
pub mod build_nav;
pub mod context;
pub mod new;
pub mod serve;

use std::path::Path;

use self::context::Context;

///
/// The system test scenario.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scenario {
    /// Creating a new project.
    New,
    /// Building a single-page project.
    Build,
    /// Building a project with explicit navigation and directory URLs.
    BuildNav,
    /// Serving a new project over HTTP.
    Serve,
}

impl Scenario {
    /// All scenarios in the execution order.
    pub const ALL: [Self; 4] = [Self::New, Self::Build, Self::BuildNav, Self::Serve];

    /// The temporary directory prefix.
    pub const TEMPORARY_DIRECTORY_PREFIX: &'static str = "mkdocs_system_test_";

    ///
    /// Returns the scenario name.
    ///
    pub fn name(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Build => "build",
            Self::BuildNav => "build-nav",
            Self::Serve => "serve",
        }
    }

    ///
    /// Runs the scenario in a fresh temporary directory.
    ///
    pub fn run(&self, context: &Context) -> anyhow::Result<()> {
        let directory = tempfile::Builder::new()
            .prefix(Self::TEMPORARY_DIRECTORY_PREFIX)
            .tempdir()
            .map_err(|error| anyhow::anyhow!("Temporary directory creation: {error}"))?;

        match self {
            Self::New => new::run(context, directory.path()),
            Self::Build => build::run(context, directory.path()),
            Self::BuildNav => build_nav::run(context, directory.path()),
            Self::Serve => serve::run(context, directory.path()),
        }
    }
}

impl std::str::FromStr for Scenario {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|scenario| scenario.name() == string)
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Unknown scenario `{string}`. Supported scenarios: {}",
                    Self::ALL
                        .iter()
                        .map(|scenario| scenario.name())
                        .collect::<Vec<&str>>()
                        .join(", ")
                )
            })
    }
}

impl std::fmt::Display for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

///
/// Reads a text file that the scenario expects to exist.
///
pub(crate) fn read_expected(path: &Path) -> anyhow::Result<String> {
    anyhow::ensure!(path.is_file(), "Expected file {path:?} does not exist");
    std::fs::read_to_string(path).map_err(|error| anyhow::anyhow!("File {path:?} reading: {error}"))
}

///
/// Checks the first heading and paragraph of a built page.
///
pub(crate) fn check_page(path: &Path, heading: &str, paragraph: &str) -> anyhow::Result<()> {
    let html = read_expected(path)?;

    let found = crate::html::first_element_text(html.as_str(), "h1");
    anyhow::ensure!(
        found.as_deref() == Some(heading),
        "Page {path:?}: expected the first <h1> {heading:?}, found {found:?}"
    );

    let found = crate::html::first_element_text(html.as_str(), "p");
    anyhow::ensure!(
        found.as_deref() == Some(paragraph),
        "Page {path:?}: expected the first <p> {paragraph:?}, found {found:?}"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::Scenario;

    #[test]
    fn names() {
        for scenario in Scenario::ALL.into_iter() {
            assert_eq!(
                Scenario::from_str(scenario.name()).expect("Always valid"),
                scenario
            );
        }
        assert!(Scenario::from_str("deploy").is_err());
    }

    #[test]
    fn check_page() {
        let directory = tempfile::tempdir().expect("Temporary directory creation");
        let path = directory.path().join("index.html");
        std::fs::write(
            path.as_path(),
            r#"<div><h1 id="h1">H1</h1><p>Paragraph</p></div>"#,
        )
        .expect("File writing");

        assert!(super::check_page(path.as_path(), "H1", "Paragraph").is_ok());
        assert!(super::check_page(path.as_path(), "H2", "Paragraph").is_err());
        assert!(super::check_page(directory.path().join("missing.html").as_path(), "H1", "").is_err());
    }
}
