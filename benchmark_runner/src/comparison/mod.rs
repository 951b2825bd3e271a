//!
//! The repository comparison table.
//!

pub mod row;

use std::fmt::Write as _;
use std::path::Path;

use colored::Colorize;

use crate::output_format::OutputFormat;
use crate::result::BenchmarkResult;

use self::row::Row;

///
/// The repository comparison table.
///
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Comparison {
    /// The rows in the benchmark order.
    pub rows: Vec<Row>,
}

impl Comparison {
    ///
    /// Returns whether the table has no rows.
    ///
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    ///
    /// Serializes the table to CSV.
    ///
    pub fn to_csv(&self) -> String {
        let mut content = String::with_capacity((self.rows.len() + 1) * 128);
        content.push_str(
            r#""Repository", "Pages", "Markdown Files", "Images", "Total Size (MB)", "Build Time (s)", "Memory (MB)", "Time per Page (ms)", "Memory per Page (MB)", "Has Plugins""#,
        );
        content.push('\n');

        for row in self.rows.iter() {
            writeln!(
                &mut content,
                r#"{}, {}, {}, {}, {:.2}, {:.2}, {:.2}, {:.1}, {}, {}"#,
                crate::util::csv_quote(row.repository.as_str()),
                row.pages,
                row.markdown_files,
                row.images,
                row.total_size_mb,
                row.build_time_seconds,
                row.memory_mb,
                row.time_per_page_ms,
                row.memory_per_page_mb
                    .map(|value| format!("{value:.2}"))
                    .unwrap_or_default(),
                row.has_plugins,
            )
            .expect("Always valid");
        }

        content
    }

    ///
    /// Serializes the table to a JSON array of rows.
    ///
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(&self.rows).expect("Always valid")
    }

    ///
    /// Writes the table to `path` in `format`.
    ///
    pub fn write(&self, path: &Path, format: OutputFormat) -> anyhow::Result<()> {
        let contents = match format {
            OutputFormat::Csv => self.to_csv(),
            OutputFormat::Json => self.to_json(),
        };
        std::fs::write(path, contents)
            .map_err(|error| anyhow::anyhow!("Comparison file {path:?} writing: {error}"))
    }
}

impl From<&[BenchmarkResult]> for Comparison {
    fn from(results: &[BenchmarkResult]) -> Self {
        Self {
            rows: results.iter().filter_map(Row::from_result).collect(),
        }
    }
}

impl std::fmt::Display for Comparison {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{:<24} {:>6} {:>6} {:>7} {:>10} {:>10} {:>10} {:>10} {:>10} {:>8}",
            "Repository".bold(),
            "Pages".bold(),
            "MD".bold(),
            "Images".bold(),
            "Size MB".bold(),
            "Build s".bold(),
            "Memory MB".bold(),
            "ms/page".bold(),
            "MB/page".bold(),
            "Plugins".bold(),
        )?;

        for row in self.rows.iter() {
            writeln!(
                f,
                "{:<24} {:>6} {:>6} {:>7} {:>10.2} {:>10.2} {:>10.2} {:>10.1} {:>10} {:>8}",
                row.repository,
                row.pages,
                row.markdown_files,
                row.images,
                row.total_size_mb,
                row.build_time_seconds,
                row.memory_mb,
                row.time_per_page_ms,
                row.memory_per_page_mb
                    .map(|value| format!("{value:.2}"))
                    .unwrap_or_else(|| "-".to_owned()),
                if row.has_plugins { "yes" } else { "no" },
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Comparison;
    use crate::output_format::OutputFormat;
    use crate::result::BenchmarkResult;

    fn results() -> Vec<BenchmarkResult> {
        let mut with_plugins = super::row::tests::result("material", 4, 2.0, 80.0);
        with_plugins.project_stats.has_plugins = true;
        let mut no_clean = super::row::tests::result("broken", 3, 1.0, 10.0);
        no_clean.build_results.clear();

        vec![
            super::row::tests::result("mkdocs", 10, 1.0, 40.0),
            no_clean,
            with_plugins,
            super::row::tests::result("empty", 0, 0.5, 30.0),
        ]
    }

    #[test]
    fn rows_skip_missing_clean_build() {
        let comparison = Comparison::from(results().as_slice());
        let names: Vec<&str> = comparison
            .rows
            .iter()
            .map(|row| row.repository.as_str())
            .collect();
        assert_eq!(names, vec!["mkdocs", "material", "empty"]);
    }

    #[test]
    fn csv() {
        let comparison = Comparison::from(results().as_slice());
        let csv = comparison.to_csv();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with(r#""Repository", "Pages""#));
        assert_eq!(
            lines[1],
            r#""mkdocs", 10, 10, 0, 0.00, 1.00, 40.00, 100.0, 4.00, false"#
        );
        assert_eq!(
            lines[2],
            r#""material", 4, 4, 0, 0.00, 2.00, 80.00, 500.0, 20.00, true"#
        );
        assert_eq!(
            lines[3],
            r#""empty", 0, 0, 0, 0.00, 0.50, 30.00, 500.0, , false"#
        );
    }

    #[test]
    fn csv_quotes_escaped() {
        let results = vec![super::row::tests::result(r#"Docs, "v2""#, 10, 1.0, 40.0)];
        let csv = Comparison::from(results.as_slice()).to_csv();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(
            lines[1],
            r#""Docs, ""v2""", 10, 10, 0, 0.00, 1.00, 40.00, 100.0, 4.00, false"#
        );
    }

    #[test]
    fn json() {
        let comparison = Comparison::from(results().as_slice());
        let value: serde_json::Value =
            serde_json::from_str(comparison.to_json().as_str()).expect("Always valid");

        assert_eq!(value.as_array().map(Vec::len), Some(3));
        assert_eq!(value[0]["repository"], "mkdocs");
        assert_eq!(value[2]["memory_per_page_mb"], serde_json::Value::Null);
    }

    #[test]
    fn write() {
        let directory = tempfile::tempdir().expect("Temporary directory creation");
        let path = directory.path().join("comparison.csv");

        let comparison = Comparison::from(results().as_slice());
        comparison
            .write(path.as_path(), OutputFormat::Csv)
            .expect("Comparison writing");

        let written = std::fs::read_to_string(path).expect("File reading");
        assert_eq!(written, comparison.to_csv());
    }
}
