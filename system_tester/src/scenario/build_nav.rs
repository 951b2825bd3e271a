//!
//! The navigation build scenario.
//!

use std::path::Path;

use crate::fixture::config::Config;
use crate::fixture::Project;
use crate::scenario::context::Context;

///
/// Builds a two-page project with explicit navigation and directory URLs, and checks
/// both rendered pages.
///
pub fn run(context: &Context, directory: &Path) -> anyhow::Result<()> {
    let config = Config::new("Test Site")
        .with_nav_entry("Home", "index.md")
        .with_nav_entry("About", "about.md");
    Project::new(config)
        .with_page(
            "index.md",
            "# This is the h1 for the home page\n\nThis is the home page paragraph",
        )
        .with_page(
            "about.md",
            "# This is the h1 for the about page\n\nThis is the about page paragraph",
        )
        .write(directory)?;

    context.mkdocs.build(
        directory,
        &["-f", Project::CONFIG_FILE_NAME, "--use-directory-urls"],
    )?;

    let site_dir = directory.join(Project::SITE_DIRECTORY);
    anyhow::ensure!(site_dir.is_dir(), "Site directory {site_dir:?} not created");

    super::check_page(
        site_dir.join("index.html").as_path(),
        "This is the h1 for the home page",
        "This is the home page paragraph",
    )?;
    super::check_page(
        site_dir.join("about").join("index.html").as_path(),
        "This is the h1 for the about page",
        "This is the about page paragraph",
    )
}
