//!
//! The load test request statistics.
//!

pub mod entry;

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::Path;
use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;

use colored::Colorize;

use self::entry::Entry;

///
/// The load test request statistics.
///
#[derive(Debug, Default)]
pub struct Statistics {
    /// The per-path entries.
    entries: BTreeMap<String, Entry>,
    /// Whether every request is printed.
    verbose: bool,
    /// The run duration, set when the run is finished.
    elapsed: Duration,
    /// Whether the run is finished and late outcomes are discarded.
    finished: bool,
}

impl Statistics {
    /// The name of the aggregated row.
    pub const AGGREGATED: &'static str = "Aggregated";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(verbose: bool) -> Self {
        Self {
            entries: BTreeMap::new(),
            verbose,
            elapsed: Duration::ZERO,
            finished: false,
        }
    }

    ///
    /// Wraps data into a synchronized shared reference.
    ///
    pub fn wrap(self) -> Arc<Mutex<Self>> {
        Arc::new(Mutex::new(self))
    }

    ///
    /// Extracts the data from the synchronized shared reference.
    ///
    /// Users detached after the run may still hold the reference. They are
    /// left with an empty finished copy, which discards their outcomes.
    ///
    pub fn unwrap_arc(statistics: Arc<Mutex<Self>>) -> anyhow::Result<Self> {
        match Arc::try_unwrap(statistics) {
            Ok(statistics) => statistics
                .into_inner()
                .map_err(|_| anyhow::anyhow!("Statistics lock is poisoned")),
            Err(statistics) => {
                let mut statistics = statistics
                    .lock()
                    .map_err(|_| anyhow::anyhow!("Statistics lock is poisoned"))?;
                let detached = Self {
                    entries: BTreeMap::new(),
                    verbose: false,
                    elapsed: statistics.elapsed,
                    finished: true,
                };
                Ok(std::mem::replace(&mut *statistics, detached))
            }
        }
    }

    ///
    /// Records a request outcome: the response status code or the transport error.
    ///
    /// Status codes from 400 upwards are failures. Outcomes arriving after the
    /// run is finished are discarded.
    ///
    pub fn record(&mut self, path: &str, latency: Duration, outcome: Result<u16, String>) {
        if self.finished {
            return;
        }

        let error = match outcome {
            Ok(status) if status >= 400 => Some(format!("HTTP {status}")),
            Ok(_) => None,
            Err(error) => Some(error),
        };

        if self.verbose {
            let outcome = match error.as_ref() {
                Some(error) => error.bright_red(),
                None => "OK".green(),
            };
            println!(
                "{:>12} {:>6}ms {path}",
                outcome,
                latency.as_millis().to_string().bright_white()
            );
        }

        self.entries
            .entry(path.to_owned())
            .or_default()
            .record(latency, error);
    }

    ///
    /// Sets the run duration used for throughput and closes the statistics.
    ///
    pub fn finish(&mut self, elapsed: Duration) {
        self.elapsed = elapsed;
        self.finished = true;
    }

    ///
    /// Returns the entry of `path`.
    ///
    pub fn get(&self, path: &str) -> Option<&Entry> {
        self.entries.get(path)
    }

    ///
    /// Returns all requests merged into one entry.
    ///
    pub fn total(&self) -> Entry {
        let mut total = Entry::default();
        for entry in self.entries.values() {
            total.merge(entry);
        }
        total
    }

    ///
    /// Serializes the statistics to CSV.
    ///
    pub fn to_csv(&self) -> String {
        let mut content = String::with_capacity((self.entries.len() + 2) * 128);
        content.push_str(
            r#""Name", "Requests", "Failures", "Average (ms)", "Min (ms)", "Median (ms)", "95% (ms)", "Max (ms)", "Requests/s""#,
        );
        content.push('\n');

        let total = self.total();
        let rows = self
            .entries
            .iter()
            .map(|(path, entry)| (path.as_str(), entry))
            .chain(std::iter::once((Self::AGGREGATED, &total)));
        for (name, entry) in rows {
            writeln!(
                &mut content,
                r#"{}, {}, {}, {}, {}, {}, {}, {}, {:.2}"#,
                Self::csv_quote(name),
                entry.requests,
                entry.failures,
                entry.average().as_millis(),
                entry.min().as_millis(),
                entry.percentile(0.5).as_millis(),
                entry.percentile(0.95).as_millis(),
                entry.max().as_millis(),
                entry.requests_per_second(self.elapsed),
            )
            .expect("Always valid");
        }

        content
    }

    ///
    /// Writes the statistics to a CSV file.
    ///
    pub fn write_csv(&self, path: &Path) -> anyhow::Result<()> {
        std::fs::write(path, self.to_csv())
            .map_err(|error| anyhow::anyhow!("Statistics file {path:?} writing: {error}"))
    }

    ///
    /// Quotes a CSV text field, doubling the embedded quotes.
    ///
    fn csv_quote(value: &str) -> String {
        format!("\"{}\"", value.replace('"', "\"\""))
    }
}

impl std::fmt::Display for Statistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{:<48} {:>9} {:>9} {:>8} {:>8} {:>8} {:>8} {:>8} {:>8}",
            "Name".bold(),
            "Requests".bold(),
            "Failures".bold(),
            "Avg ms".bold(),
            "Min ms".bold(),
            "Med ms".bold(),
            "95% ms".bold(),
            "Max ms".bold(),
            "Req/s".bold(),
        )?;

        let total = self.total();
        let rows = self
            .entries
            .iter()
            .map(|(path, entry)| (path.as_str(), entry))
            .chain(std::iter::once((Self::AGGREGATED, &total)));
        for (name, entry) in rows {
            let failures = if entry.failures > 0 {
                entry.failures.to_string().bright_red()
            } else {
                entry.failures.to_string().green()
            };
            writeln!(
                f,
                "{:<48} {:>9} {:>9} {:>8} {:>8} {:>8} {:>8} {:>8} {:>8.2}",
                name,
                entry.requests,
                failures,
                entry.average().as_millis(),
                entry.min().as_millis(),
                entry.percentile(0.5).as_millis(),
                entry.percentile(0.95).as_millis(),
                entry.max().as_millis(),
                entry.requests_per_second(self.elapsed),
            )?;
        }

        for (error, count) in total.errors.iter() {
            writeln!(f, "{:>9} {} {error}", count, "×".bright_red())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::Statistics;

    #[test]
    fn failures_classified() {
        let mut statistics = Statistics::new(false);
        statistics.record("/", Duration::from_millis(5), Ok(200));
        statistics.record("/", Duration::from_millis(5), Ok(304));
        statistics.record("/missing/", Duration::from_millis(5), Ok(404));
        statistics.record("/down/", Duration::from_millis(5), Err("connection refused".to_owned()));

        assert_eq!(statistics.get("/").map(|entry| entry.failures), Some(0));
        assert_eq!(statistics.get("/missing/").map(|entry| entry.failures), Some(1));
        assert_eq!(statistics.get("/down/").map(|entry| entry.failures), Some(1));

        let total = statistics.total();
        assert_eq!(total.requests, 4);
        assert_eq!(total.failures, 2);
        assert_eq!(total.errors.get("HTTP 404"), Some(&1));
    }

    #[test]
    fn csv() {
        let mut statistics = Statistics::new(false);
        statistics.record("/", Duration::from_millis(10), Ok(200));
        statistics.record("/", Duration::from_millis(30), Ok(200));
        statistics.finish(Duration::from_secs(2));

        let csv = statistics.to_csv();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with(r#""Name", "Requests""#));
        assert_eq!(lines[1], r#""/", 2, 0, 20, 10, 10, 30, 30, 1.00"#);
        assert!(lines[2].starts_with(r#""Aggregated", 2, 0"#));
    }

    #[test]
    fn csv_quotes_escaped() {
        let mut statistics = Statistics::new(false);
        statistics.record(r#"/a"b/"#, Duration::from_millis(10), Ok(200));
        statistics.finish(Duration::from_secs(1));

        let csv = statistics.to_csv();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[1], r#""/a""b/", 1, 0, 10, 10, 10, 10, 10, 1.00"#);
    }

    #[test]
    fn late_outcomes_discarded() {
        let mut statistics = Statistics::new(false);
        statistics.record("/", Duration::from_millis(10), Ok(200));
        statistics.finish(Duration::from_secs(1));
        statistics.record("/", Duration::from_secs(5), Err("timed out".to_owned()));

        let entry = statistics.get("/").expect("Always exists");
        assert_eq!(entry.requests, 1);
        assert_eq!(entry.failures, 0);
    }

    #[test]
    fn unwrap_shared() {
        let statistics = Statistics::new(false).wrap();
        let detached = statistics.clone();
        statistics
            .lock()
            .expect("Sync")
            .record("/", Duration::from_millis(10), Ok(200));

        let extracted = Statistics::unwrap_arc(statistics).expect("Extracted statistics");
        assert_eq!(extracted.get("/").map(|entry| entry.requests), Some(1));

        let mut detached = detached.lock().expect("Sync");
        detached.record("/", Duration::from_millis(10), Ok(200));
        assert!(detached.get("/").is_none());
    }
}
