//!
//! The build test runner.
//!

use std::path::Path;
use std::process::Command;

use colored::Colorize;

use crate::build::measurement::Measurement;
use crate::build::sample::Sample;
use crate::build::test::Test;

///
/// The build test runner.
///
/// Every build test is run once to warm up the caches, then measured several times.
///
#[derive(Debug, Clone)]
pub struct Runner {
    /// The build tool executable.
    pub executable: String,
    /// The number of measured runs per build test.
    pub repetitions: usize,
    /// Whether every run is printed.
    pub verbose: bool,
}

impl Runner {
    /// The default number of measured runs per build test.
    pub const DEFAULT_REPETITIONS: usize = 3;

    /// The error output prefix length printed on failures.
    pub const STDERR_EXCERPT_LENGTH: usize = 200;

    ///
    /// A shortcut constructor.
    ///
    pub fn new(executable: String, verbose: bool) -> anyhow::Result<Self> {
        if let Err(error) = which::which(executable.as_str()) {
            anyhow::bail!("The `{executable}` executable not found in ${{PATH}}: {error}");
        }
        Ok(Self {
            executable,
            repetitions: Self::DEFAULT_REPETITIONS,
            verbose,
        })
    }

    ///
    /// Sets the number of measured runs.
    ///
    pub fn with_repetitions(mut self, repetitions: usize) -> Self {
        self.repetitions = repetitions.max(1);
        self
    }

    ///
    /// Runs all build tests in `project_dir`, the directory with the build configuration.
    ///
    pub fn run_build_tests(&self, project_dir: &Path, name: &str) -> anyhow::Result<Vec<Sample>> {
        let mut samples = Vec::with_capacity(Test::ALL.len());
        for test in Test::ALL.into_iter() {
            println!(
                "     {} {name} {}",
                "Testing".bright_green().bold(),
                test.label()
            );

            self.run(project_dir, name, test, None)?;

            let mut measurements = Vec::with_capacity(self.repetitions);
            for run in 1..=self.repetitions {
                measurements.push(self.run(project_dir, name, test, Some(run))?);
            }

            if let Some(sample) = Sample::from_measurements(test, measurements.as_slice()) {
                samples.push(sample);
            }
        }
        Ok(samples)
    }

    ///
    /// Runs the build once. The warm-up run has no number.
    ///
    fn run(
        &self,
        project_dir: &Path,
        name: &str,
        test: Test,
        run: Option<usize>,
    ) -> anyhow::Result<Measurement> {
        let mut command = Command::new(self.executable.as_str());
        command.current_dir(project_dir);
        command.args(test.arguments());

        let measurement = Measurement::measure(&mut command)?;
        let run_name = match run {
            Some(run) => format!("run {run}"),
            None => "warm-up".to_owned(),
        };

        if !measurement.success {
            println!(
                "     {} {name} {} {run_name} failed: {}",
                "Warning".bright_yellow().bold(),
                test.label(),
                crate::util::excerpt(measurement.stderr.as_str(), Self::STDERR_EXCERPT_LENGTH)
                    .trim(),
            );
        } else if self.verbose {
            println!(
                "{:>12} {name} {} {run_name}: {:.2}s, {:.2} MB",
                "Measured".bright_white(),
                test.label(),
                measurement.elapsed.as_secs_f64(),
                crate::util::bytes_to_megabytes(measurement.peak_memory_bytes),
            );
        }

        Ok(measurement)
    }
}
