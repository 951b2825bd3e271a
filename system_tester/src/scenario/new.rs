//!
//! The project creation scenario.
//!

use std::path::Path;

use crate::scenario::context::Context;

/// The created project name.
pub const PROJECT_NAME: &str = "test_project";

///
/// Runs `mkdocs new` and checks the default project layout.
///
pub fn run(context: &Context, directory: &Path) -> anyhow::Result<()> {
    context.mkdocs.new_project(directory, PROJECT_NAME)?;

    let project_dir = directory.join(PROJECT_NAME);
    anyhow::ensure!(
        project_dir.is_dir(),
        "Project directory {project_dir:?} not created"
    );
    let docs_dir = project_dir.join("docs");
    anyhow::ensure!(docs_dir.is_dir(), "Docs directory {docs_dir:?} not created");

    let config = super::read_expected(project_dir.join("mkdocs.yml").as_path())?;
    anyhow::ensure!(
        config.contains("site_name: My Docs"),
        "Default site name not found in the build configuration"
    );

    let index = super::read_expected(docs_dir.join("index.md").as_path())?;
    anyhow::ensure!(
        index.contains("# Welcome to MkDocs"),
        "Welcome header not found in the index page"
    );
    anyhow::ensure!(
        index.contains("mkdocs new [dir-name]"),
        "Command documentation not found in the index page"
    );

    Ok(())
}
