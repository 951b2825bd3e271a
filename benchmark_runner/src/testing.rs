//!
//! The test helpers.
//!

use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use std::path::PathBuf;

///
/// Writes an executable shell script named `name` into `directory`.
///
pub(crate) fn write_script(directory: &Path, name: &str, body: &str) -> PathBuf {
    let path = directory.join(name);
    std::fs::write(path.as_path(), format!("#!/bin/sh\n{body}\n")).expect("Script writing");
    std::fs::set_permissions(path.as_path(), std::fs::Permissions::from_mode(0o755))
        .expect("Script permissions");
    path
}
