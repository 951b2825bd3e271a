//!
//! The performance insights derived from the comparison table.
//!

use std::path::Path;

use chrono::DateTime;
use chrono::Local;

use crate::comparison::row::Row;
use crate::comparison::Comparison;

///
/// The performance insights derived from the comparison table.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Insights {
    /// The mean clean build time per page, in milliseconds.
    pub average_time_per_page_ms: f64,
    /// The repository with the longest time per page, and its value.
    pub slowest: (String, f64),
    /// The mean memory per page over the repositories with pages, in megabytes.
    pub average_memory_per_page_mb: Option<f64>,
    /// The relative time per page difference of the repositories with plugins, in percent.
    pub plugin_impact_percent: Option<f64>,
}

impl Insights {
    /// The report title.
    pub const TITLE: &'static str = "# MkDocs Performance Insights";

    ///
    /// Derives the insights. Returns `None` for an empty table.
    ///
    pub fn generate(comparison: &Comparison) -> Option<Self> {
        let times: Vec<f64> = comparison
            .rows
            .iter()
            .map(|row| row.time_per_page_ms)
            .collect();
        let average_time_per_page_ms = crate::util::mean(times.as_slice())?;

        let mut slowest: Option<(&str, f64)> = None;
        for row in comparison.rows.iter() {
            match slowest {
                Some((_, time)) if row.time_per_page_ms <= time => {}
                _ => slowest = Some((row.repository.as_str(), row.time_per_page_ms)),
            }
        }
        let slowest = slowest.map(|(name, time)| (name.to_owned(), time))?;

        let memories: Vec<f64> = comparison
            .rows
            .iter()
            .filter_map(|row| row.memory_per_page_mb)
            .collect();
        let average_memory_per_page_mb = crate::util::mean(memories.as_slice());

        let (with_plugins, without_plugins): (Vec<&Row>, Vec<&Row>) =
            comparison.rows.iter().partition(|row| row.has_plugins);
        let with_plugins: Vec<f64> = with_plugins
            .into_iter()
            .map(|row| row.time_per_page_ms)
            .collect();
        let without_plugins: Vec<f64> = without_plugins
            .into_iter()
            .map(|row| row.time_per_page_ms)
            .collect();
        let plugin_impact_percent = match (
            crate::util::mean(with_plugins.as_slice()),
            crate::util::mean(without_plugins.as_slice()),
        ) {
            (Some(with), Some(without)) if without != 0.0 => {
                Some((with - without) / without * 100.0)
            }
            _ => None,
        };

        Some(Self {
            average_time_per_page_ms,
            slowest,
            average_memory_per_page_mb,
            plugin_impact_percent,
        })
    }

    ///
    /// Returns the findings as bullet lines.
    ///
    pub fn findings(&self) -> Vec<String> {
        let mut findings = Vec::with_capacity(4);
        findings.push(format!(
            "• Average time per page: {:.1}ms",
            self.average_time_per_page_ms
        ));
        findings.push(format!(
            "• Slowest per page: {} ({:.1}ms/page)",
            self.slowest.0, self.slowest.1
        ));
        if let Some(memory) = self.average_memory_per_page_mb {
            findings.push(format!("• Average memory per page: {memory:.2}MB"));
        }
        if let Some(impact) = self.plugin_impact_percent {
            findings.push(format!("• Plugin impact on build time: {impact:+.1}%"));
        }
        findings
    }

    ///
    /// Renders the markdown report.
    ///
    pub fn to_markdown(&self, generated: DateTime<Local>) -> String {
        let mut content = String::with_capacity(512);
        content.push_str(Self::TITLE);
        content.push_str("\n\n");
        content.push_str(
            format!("Generated: {}\n\n", generated.format("%Y-%m-%d %H:%M:%S")).as_str(),
        );
        content.push_str("## Key Findings\n\n");
        for finding in self.findings().into_iter() {
            content.push_str(finding.as_str());
            content.push('\n');
        }
        content
    }

    ///
    /// Writes the markdown report to `path`.
    ///
    pub fn write(&self, path: &Path, generated: DateTime<Local>) -> anyhow::Result<()> {
        std::fs::write(path, self.to_markdown(generated))
            .map_err(|error| anyhow::anyhow!("Insights file {path:?} writing: {error}"))
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::Insights;
    use crate::comparison::row::Row;
    use crate::comparison::Comparison;

    fn row(name: &str, time_per_page_ms: f64, memory: Option<f64>, has_plugins: bool) -> Row {
        Row {
            repository: name.to_owned(),
            pages: 1,
            markdown_files: 1,
            images: 0,
            total_size_mb: 0.0,
            build_time_seconds: 0.0,
            memory_mb: 0.0,
            time_per_page_ms,
            memory_per_page_mb: memory,
            has_plugins,
        }
    }

    #[test]
    fn empty() {
        assert!(Insights::generate(&Comparison::default()).is_none());
    }

    #[test]
    fn averages_and_slowest() {
        let comparison = Comparison {
            rows: vec![
                row("a", 100.0, Some(2.0), false),
                row("b", 300.0, None, false),
                row("c", 300.0, Some(4.0), false),
            ],
        };

        let insights = Insights::generate(&comparison).expect("Always valid");
        assert!((insights.average_time_per_page_ms - 233.333).abs() < 0.001);
        assert_eq!(insights.slowest, ("b".to_owned(), 300.0));
        assert_eq!(insights.average_memory_per_page_mb, Some(3.0));
        assert_eq!(insights.plugin_impact_percent, None);
    }

    #[test]
    fn plugin_impact() {
        let comparison = Comparison {
            rows: vec![
                row("plain", 100.0, None, false),
                row("material", 150.0, None, true),
                row("fastapi", 250.0, None, true),
            ],
        };

        let insights = Insights::generate(&comparison).expect("Always valid");
        assert_eq!(insights.plugin_impact_percent, Some(100.0));
        assert_eq!(insights.average_memory_per_page_mb, None);
        assert!(insights
            .findings()
            .contains(&"• Plugin impact on build time: +100.0%".to_owned()));
    }

    #[test]
    fn plugin_impact_requires_both_groups() {
        let comparison = Comparison {
            rows: vec![row("a", 100.0, None, true), row("b", 200.0, None, true)],
        };

        let insights = Insights::generate(&comparison).expect("Always valid");
        assert_eq!(insights.plugin_impact_percent, None);
    }

    #[test]
    fn plugin_impact_zero_baseline() {
        let comparison = Comparison {
            rows: vec![row("a", 0.0, None, false), row("b", 200.0, None, true)],
        };

        let insights = Insights::generate(&comparison).expect("Always valid");
        assert_eq!(insights.plugin_impact_percent, None);
    }

    #[test]
    fn markdown() {
        let comparison = Comparison {
            rows: vec![row("mkdocs", 12.34, Some(0.5), false)],
        };
        let generated = chrono::Local
            .with_ymd_and_hms(2025, 3, 4, 5, 6, 7)
            .single()
            .expect("Always valid");

        let markdown = Insights::generate(&comparison)
            .expect("Always valid")
            .to_markdown(generated);
        assert_eq!(
            markdown,
            "# MkDocs Performance Insights\n\n\
             Generated: 2025-03-04 05:06:07\n\n\
             ## Key Findings\n\n\
             • Average time per page: 12.3ms\n\
             • Slowest per page: mkdocs (12.3ms/page)\n\
             • Average memory per page: 0.50MB\n"
        );
    }
}
