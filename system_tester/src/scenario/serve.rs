//!
//! The development server scenario.
//!

use std::path::Path;

use crate::scenario::context::Context;

/// The text expected on the default home page.
pub const EXPECTED_TEXT: &str = "Welcome to MkDocs";

///
/// Creates a project in place, serves it, and checks the home page.
///
pub fn run(context: &Context, directory: &Path) -> anyhow::Result<()> {
    context.mkdocs.new_project(directory, ".")?;

    let server = context
        .mkdocs
        .serve(directory, context.serve_address.as_str())?;
    let url = format!("http://{}/", context.serve_address);
    let response = context.health_check.wait(url.as_str())?;

    anyhow::ensure!(
        response.status == 200,
        "Expected status 200 from {url}, found {}",
        response.status
    );
    anyhow::ensure!(
        response.body.contains(EXPECTED_TEXT),
        "Home page does not contain {EXPECTED_TEXT:?}"
    );

    server.interrupt()?;
    Ok(())
}
