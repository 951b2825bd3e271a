//!
//! The benchmark orchestrator.
//!

use std::path::Path;
use std::path::PathBuf;
use std::process::Command;
use std::process::Stdio;
use std::time::Instant;

use chrono::DateTime;
use chrono::Local;
use colored::Colorize;

use crate::build::runner::Runner;
use crate::comparison::Comparison;
use crate::error::RepositoryError;
use crate::insights::Insights;
use crate::output_format::OutputFormat;
use crate::project::stats::Stats;
use crate::result::BenchmarkResult;

///
/// The benchmark orchestrator.
///
/// Repositories are tested one by one. A repository that cannot be cloned, has no build
/// configuration, or cannot be analyzed is skipped without aborting the batch.
///
#[derive(Debug)]
pub struct Orchestrator {
    /// The `git` executable.
    git: String,
    /// The build test runner.
    runner: Runner,
    /// The directory where the temporary clones are created.
    temporary_root: PathBuf,
    /// The run start time, used in the artifact names.
    started: DateTime<Local>,
    /// The directory where the artifacts are written.
    output_directory: PathBuf,
    /// The comparison table format.
    output_format: OutputFormat,
    /// The results in the testing order.
    results: Vec<BenchmarkResult>,
}

impl Orchestrator {
    /// The run timestamp format used in the artifact names.
    pub const TIMESTAMP_FORMAT: &'static str = "%Y%m%d_%H%M%S";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(
        git: String,
        runner: Runner,
        output_directory: PathBuf,
        output_format: OutputFormat,
    ) -> anyhow::Result<Self> {
        if let Err(error) = which::which(git.as_str()) {
            anyhow::bail!("The `{git}` executable not found in ${{PATH}}: {error}");
        }
        std::fs::create_dir_all(output_directory.as_path()).map_err(|error| {
            anyhow::anyhow!("Output directory {output_directory:?} creation: {error}")
        })?;

        Ok(Self {
            git,
            runner,
            temporary_root: std::env::temp_dir(),
            started: Local::now(),
            output_directory,
            output_format,
            results: Vec::new(),
        })
    }

    ///
    /// Sets the directory where the temporary clones are created.
    ///
    pub fn with_temporary_root(mut self, temporary_root: PathBuf) -> Self {
        self.temporary_root = temporary_root;
        self
    }

    ///
    /// Returns the run timestamp used in the artifact names.
    ///
    pub fn timestamp(&self) -> String {
        self.started.format(Self::TIMESTAMP_FORMAT).to_string()
    }

    ///
    /// Returns the results collected so far.
    ///
    pub fn results(&self) -> &[BenchmarkResult] {
        self.results.as_slice()
    }

    ///
    /// Clones, analyzes, and benchmarks the repository.
    ///
    /// Returns `None` if the repository has been skipped.
    ///
    pub fn test_repository(
        &mut self,
        url: &str,
        name: &str,
        branch: &str,
    ) -> Option<&BenchmarkResult> {
        println!(
            "     {} {name} ({url}, branch `{branch}`)",
            "Testing".bright_green().bold(),
        );

        match self.try_test_repository(url, name, branch) {
            Ok(result) => {
                self.results.push(result);
                self.results.last()
            }
            Err(error) => {
                eprintln!("     {} {name}: {error}", "Skipped".bright_red().bold());
                None
            }
        }
    }

    ///
    /// Analyzes the documentation project in `project_dir`.
    ///
    pub fn analyze_project(&self, project_dir: &Path) -> anyhow::Result<Stats> {
        Stats::analyze(project_dir)
    }

    ///
    /// Builds the comparison table from the collected results, prints and saves it,
    /// then generates the insights.
    ///
    pub fn compare_repositories(&self) -> anyhow::Result<Comparison> {
        let comparison = Comparison::from(self.results.as_slice());
        if comparison.is_empty() {
            println!(
                "     {} no results to compare",
                "Warning".bright_yellow().bold()
            );
            return Ok(comparison);
        }

        println!();
        print!("{comparison}");
        println!();

        let path = self.output_directory.join(format!(
            "mkdocs_comparison_{}.{}",
            self.timestamp(),
            self.output_format.extension()
        ));
        comparison.write(path.as_path(), self.output_format)?;
        println!(
            "       {} comparison to {}",
            "Saved".bright_green().bold(),
            path.display()
        );

        self.generate_insights(&comparison)?;
        Ok(comparison)
    }

    ///
    /// Derives the insights from the comparison table, prints and saves them.
    ///
    pub fn generate_insights(&self, comparison: &Comparison) -> anyhow::Result<Option<Insights>> {
        let insights = match Insights::generate(comparison) {
            Some(insights) => insights,
            None => return Ok(None),
        };

        println!("{}", "Key Findings".bold());
        for finding in insights.findings().into_iter() {
            println!("  {finding}");
        }

        let path = self
            .output_directory
            .join(format!("insights_{}.md", self.timestamp()));
        insights.write(path.as_path(), Local::now())?;
        println!(
            "       {} insights to {}",
            "Saved".bright_green().bold(),
            path.display()
        );

        Ok(Some(insights))
    }

    ///
    /// Runs the whole pipeline for one repository. The clone is removed on return.
    ///
    fn try_test_repository(
        &self,
        url: &str,
        name: &str,
        branch: &str,
    ) -> Result<BenchmarkResult, RepositoryError> {
        let clone_dir = tempfile::Builder::new()
            .prefix(format!("mkdocs_test_{}_", Self::sanitize(name)).as_str())
            .tempdir_in(self.temporary_root.as_path())
            .map_err(RepositoryError::TemporaryDirectory)?;

        let start = Instant::now();
        let output = Command::new(self.git.as_str())
            .args(["clone", "--depth", "1", "-b", branch, url])
            .arg(clone_dir.path())
            .stdin(Stdio::null())
            .output()
            .map_err(RepositoryError::CloneSpawn)?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(output.stderr.as_slice());
            return Err(RepositoryError::Clone {
                status: output.status,
                stderr: crate::util::excerpt(stderr.trim(), Runner::STDERR_EXCERPT_LENGTH)
                    .to_owned(),
            });
        }
        let clone_time = crate::util::round2(start.elapsed().as_secs_f64());
        println!(
            "      {} {name} in {clone_time:.2}s",
            "Cloned".bright_green().bold()
        );

        let config_path = crate::project::config::find(clone_dir.path())
            .map_err(RepositoryError::Analysis)?
            .ok_or(RepositoryError::ConfigNotFound)?;
        let project_dir = config_path.parent().unwrap_or(clone_dir.path());

        let project_stats = self
            .analyze_project(project_dir)
            .map_err(RepositoryError::Analysis)?;
        println!(
            "    {} {name}: {} pages, {} images, {:.2} MB",
            "Analyzed".bright_green().bold(),
            project_stats.total_pages,
            project_stats.image_files,
            project_stats.total_size_mb,
        );

        let build_results = self
            .runner
            .run_build_tests(project_dir, name)
            .map_err(RepositoryError::Build)?;

        Ok(BenchmarkResult::new(
            name.to_owned(),
            url.to_owned(),
            project_stats,
            build_results,
            clone_time,
        ))
    }

    ///
    /// Makes the repository name safe for a directory name prefix.
    ///
    fn sanitize(name: &str) -> String {
        name.chars()
            .map(|character| {
                if character.is_ascii_alphanumeric() {
                    character
                } else {
                    '_'
                }
            })
            .collect()
    }
}
