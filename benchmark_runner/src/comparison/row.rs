//!
//! The comparison table row.
//!

use serde::Deserialize;
use serde::Serialize;

use crate::build::test::Test;
use crate::result::BenchmarkResult;

///
/// The comparison table row.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    /// The repository name.
    pub repository: String,
    /// The number of pages.
    pub pages: usize,
    /// The number of markdown files.
    pub markdown_files: usize,
    /// The number of images.
    pub images: usize,
    /// The docs directory size in megabytes.
    pub total_size_mb: f64,
    /// The clean build mean duration in seconds.
    pub build_time_seconds: f64,
    /// The clean build mean peak memory in megabytes.
    pub memory_mb: f64,
    /// The clean build duration per page in milliseconds.
    pub time_per_page_ms: f64,
    /// The clean build memory per page in megabytes. Absent for projects without pages.
    pub memory_per_page_mb: Option<f64>,
    /// Whether the configuration mentions plugins.
    pub has_plugins: bool,
}

impl Row {
    ///
    /// Builds the row from the clean build sample of `result`.
    ///
    /// Returns `None` if the clean build was not measured.
    ///
    pub fn from_result(result: &BenchmarkResult) -> Option<Self> {
        let clean = result.sample(Test::Clean)?;
        let stats = &result.project_stats;

        let time_per_page_ms = clean.avg_time_seconds * 1000.0 / stats.total_pages.max(1) as f64;
        let memory_per_page_mb = if stats.total_pages > 0 {
            Some(clean.avg_memory_mb / stats.total_pages as f64)
        } else {
            None
        };

        Some(Self {
            repository: result.name.clone(),
            pages: stats.total_pages,
            markdown_files: stats.markdown_files,
            images: stats.image_files,
            total_size_mb: stats.total_size_mb,
            build_time_seconds: clean.avg_time_seconds,
            memory_mb: clean.avg_memory_mb,
            time_per_page_ms,
            memory_per_page_mb,
            has_plugins: stats.has_plugins,
        })
    }
}
