//!
//! The documentation site build benchmark library.
//!

pub mod build;
pub mod comparison;
pub mod error;
pub mod insights;
pub mod orchestrator;
pub mod output_format;
pub mod project;
pub mod repository;
pub mod result;
pub mod util;

#[cfg(all(test, unix))]
pub(crate) mod testing;

pub use crate::build::measurement::Measurement as BuildMeasurement;
pub use crate::build::runner::Runner as BuildRunner;
pub use crate::build::sample::Sample as BuildSample;
pub use crate::build::test::Test as BuildTest;
pub use crate::comparison::row::Row as ComparisonRow;
pub use crate::comparison::Comparison;
pub use crate::error::RepositoryError;
pub use crate::insights::Insights;
pub use crate::orchestrator::Orchestrator;
pub use crate::output_format::OutputFormat;
pub use crate::project::stats::Stats as ProjectStats;
pub use crate::repository::Repository;
pub use crate::result::BenchmarkResult;

/// The successful process exit code.
pub const EXIT_CODE_SUCCESS: i32 = 0;

/// The failed process exit code.
pub const EXIT_CODE_FAILURE: i32 = 1;

/// The accepted build configuration file names.
pub const CONFIG_FILE_NAMES: [&str; 2] = ["mkdocs.yml", "mkdocs.yaml"];
