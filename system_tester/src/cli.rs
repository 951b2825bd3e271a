//!
//! The documentation site generator CLI wrapper.
//!

use std::path::Path;
use std::process::Command;
use std::process::Output;
use std::process::Stdio;

use crate::serve::ServeProcess;

///
/// The documentation site generator CLI wrapper.
///
#[derive(Debug, Clone)]
pub struct Mkdocs {
    /// The executable name or path.
    pub executable: String,
}

impl Mkdocs {
    /// The default executable name.
    pub const DEFAULT_EXECUTABLE_NAME: &'static str = "mkdocs";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(executable: String) -> anyhow::Result<Self> {
        if let Err(error) = which::which(executable.as_str()) {
            anyhow::bail!("The `{executable}` executable not found in ${{PATH}}: {error}");
        }
        Ok(Self { executable })
    }

    ///
    /// Runs `mkdocs new <name>` in `directory`.
    ///
    pub fn new_project(&self, directory: &Path, name: &str) -> anyhow::Result<()> {
        self.run(directory, &["new", name])?;
        Ok(())
    }

    ///
    /// Runs `mkdocs build` with extra `arguments` in `directory`.
    ///
    pub fn build(&self, directory: &Path, arguments: &[&str]) -> anyhow::Result<()> {
        let mut all_arguments = vec!["build"];
        all_arguments.extend_from_slice(arguments);
        self.run(directory, all_arguments.as_slice())?;
        Ok(())
    }

    ///
    /// Starts `mkdocs serve -a <address>` in `directory` in the background.
    ///
    pub fn serve(&self, directory: &Path, address: &str) -> anyhow::Result<ServeProcess> {
        let mut command = Command::new(self.executable.as_str());
        command.current_dir(directory);
        command.args(["serve", "-a", address]);
        command.stdin(Stdio::null());
        command.stdout(Stdio::null());
        command.stderr(Stdio::null());

        let child = command.spawn().map_err(|error| {
            anyhow::anyhow!("{} serve subprocess spawning: {error}", self.executable)
        })?;
        Ok(ServeProcess::new(child))
    }

    ///
    /// Runs the command to completion, failing on a non-zero exit code.
    ///
    fn run(&self, directory: &Path, arguments: &[&str]) -> anyhow::Result<Output> {
        let output = Command::new(self.executable.as_str())
            .current_dir(directory)
            .args(arguments)
            .stdin(Stdio::null())
            .output()
            .map_err(|error| {
                anyhow::anyhow!(
                    "{} {} subprocess spawning: {error}",
                    self.executable,
                    arguments.join(" ")
                )
            })?;

        if !output.status.success() {
            anyhow::bail!(
                "{} {} failed with {}: {}",
                self.executable,
                arguments.join(" "),
                output.status,
                String::from_utf8_lossy(output.stderr.as_slice()).trim(),
            );
        }

        Ok(output)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use std::os::unix::fs::PermissionsExt;

    use super::Mkdocs;

    fn fake(directory: &std::path::Path, body: &str) -> Mkdocs {
        let path = directory.join("mkdocs");
        std::fs::write(path.as_path(), format!("#!/bin/sh\n{body}\n")).expect("Script writing");
        std::fs::set_permissions(path.as_path(), std::fs::Permissions::from_mode(0o755))
            .expect("Script permissions");
        Mkdocs::new(path.to_string_lossy().to_string()).expect("Executable found")
    }

    #[test]
    fn missing_executable() {
        assert!(Mkdocs::new("/nonexistent/mkdocs".to_owned()).is_err());
    }

    #[test]
    fn arguments_passed() {
        let directory = tempfile::tempdir().expect("Temporary directory creation");
        let mkdocs = fake(directory.path(), "echo \"$@\" > calls.log");

        mkdocs
            .build(directory.path(), &["--use-directory-urls"])
            .expect("Build");
        let calls = std::fs::read_to_string(directory.path().join("calls.log"))
            .expect("Log reading");
        assert_eq!(calls.trim(), "build --use-directory-urls");
    }

    #[test]
    fn failure_reported() {
        let directory = tempfile::tempdir().expect("Temporary directory creation");
        let mkdocs = fake(directory.path(), "echo 'Config file not found' >&2\nexit 1");

        let error = mkdocs
            .new_project(directory.path(), "project")
            .expect_err("Must fail");
        assert!(error.to_string().contains("Config file not found"));
    }
}
