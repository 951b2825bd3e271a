//!
//! The single-page build scenario.
//!

use std::path::Path;

use crate::fixture::config::Config;
use crate::fixture::Project;
use crate::scenario::context::Context;

///
/// Builds a single-page project and checks the rendered page.
///
pub fn run(context: &Context, directory: &Path) -> anyhow::Result<()> {
    Project::new(Config::new("Test Site"))
        .with_page("index.md", "# H1\n\nParagraph")
        .write(directory)?;

    context.mkdocs.build(directory, &[])?;

    super::check_page(
        directory
            .join(Project::SITE_DIRECTORY)
            .join("index.html")
            .as_path(),
        "H1",
        "Paragraph",
    )
}
