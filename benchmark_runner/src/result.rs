//!
//! The benchmark result of one repository.
//!

use std::path::Path;

use serde::Deserialize;
use serde::Serialize;

use crate::build::sample::Sample;
use crate::build::test::Test;
use crate::project::stats::Stats;

///
/// The benchmark result of one repository.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkResult {
    /// The repository display name.
    pub name: String,
    /// The repository clone URL.
    pub repository: String,
    /// The project statistics.
    pub project_stats: Stats,
    /// The build samples, one per build test.
    pub build_results: Vec<Sample>,
    /// The clone duration in seconds.
    pub clone_time: f64,
}

impl BenchmarkResult {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(
        name: String,
        repository: String,
        project_stats: Stats,
        build_results: Vec<Sample>,
        clone_time: f64,
    ) -> Self {
        Self {
            name,
            repository,
            project_stats,
            build_results,
            clone_time,
        }
    }

    ///
    /// Returns the sample of the build test.
    ///
    pub fn sample(&self, test: Test) -> Option<&Sample> {
        self.build_results
            .iter()
            .find(|sample| sample.test == test.label())
    }

    ///
    /// Writes the results to a JSON file.
    ///
    pub fn write_all(results: &[Self], path: &Path) -> anyhow::Result<()> {
        let contents = serde_json::to_string_pretty(results).expect("Always valid");
        std::fs::write(path, contents)
            .map_err(|error| anyhow::anyhow!("Results file {path:?} writing: {error}"))
    }
}
