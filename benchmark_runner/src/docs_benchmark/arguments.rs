//!
//! The benchmark runner arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The benchmark runner arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None)]
pub struct Arguments {
    /// Prints every measured build run.
    #[arg(short, long)]
    pub verbose: bool,

    /// The JSON file with the list of repositories.
    #[arg(short, long, default_value = "configs/repositories.json")]
    pub config: PathBuf,

    /// Benchmarks only the repositories whose names contain the pattern.
    #[arg(short, long)]
    pub name: Option<String>,

    /// The documentation site generator executable.
    #[arg(long, default_value = "mkdocs")]
    pub mkdocs: String,

    /// The `git` executable.
    #[arg(long, default_value = "git")]
    pub git: String,

    /// The number of measured runs per build test.
    #[arg(long, default_value_t = docs_benchmark::BuildRunner::DEFAULT_REPETITIONS)]
    pub repetitions: usize,

    /// The directory where the comparison table and the insights are written.
    #[arg(short, long, default_value = ".")]
    pub output_directory: PathBuf,

    /// The comparison table format: `csv` or `json`.
    #[arg(short, long, default_value_t = docs_benchmark::OutputFormat::Csv)]
    pub format: docs_benchmark::OutputFormat,

    /// Also dumps the raw results to the JSON file.
    #[arg(long)]
    pub results: Option<PathBuf>,
}

impl Arguments {
    ///
    /// Validate the arguments passed from user, checking invariants that are not
    /// expressed in the type system.
    ///
    pub fn validate(arguments: Self) -> anyhow::Result<Self> {
        if arguments.repetitions == 0 {
            anyhow::bail!("At least one measured run per build test is required");
        }

        Ok(arguments)
    }
}
