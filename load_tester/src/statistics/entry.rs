//!
//! The per-path request statistics.
//!

use std::collections::BTreeMap;
use std::time::Duration;

///
/// The per-path request statistics.
///
#[derive(Debug, Default, Clone)]
pub struct Entry {
    /// The number of requests.
    pub requests: usize,
    /// The number of failed requests.
    pub failures: usize,
    /// The latency of every request.
    pub latencies: Vec<Duration>,
    /// The failure messages with their occurrence counts.
    pub errors: BTreeMap<String, usize>,
}

impl Entry {
    ///
    /// Records a request.
    ///
    pub fn record(&mut self, latency: Duration, error: Option<String>) {
        self.requests += 1;
        self.latencies.push(latency);
        if let Some(error) = error {
            self.failures += 1;
            *self.errors.entry(error).or_default() += 1;
        }
    }

    ///
    /// Merges another entry into this one.
    ///
    pub fn merge(&mut self, other: &Self) {
        self.requests += other.requests;
        self.failures += other.failures;
        self.latencies.extend_from_slice(other.latencies.as_slice());
        for (error, count) in other.errors.iter() {
            *self.errors.entry(error.to_owned()).or_default() += count;
        }
    }

    ///
    /// The minimal latency.
    ///
    pub fn min(&self) -> Duration {
        self.latencies.iter().min().copied().unwrap_or_default()
    }

    ///
    /// The maximal latency.
    ///
    pub fn max(&self) -> Duration {
        self.latencies.iter().max().copied().unwrap_or_default()
    }

    ///
    /// The arithmetic mean latency.
    ///
    pub fn average(&self) -> Duration {
        if self.latencies.is_empty() {
            return Duration::ZERO;
        }

        self.latencies.iter().sum::<Duration>() / (self.latencies.len() as u32)
    }

    ///
    /// The nearest-rank latency percentile, `quantile` in `[0, 1]`.
    ///
    pub fn percentile(&self, quantile: f64) -> Duration {
        if self.latencies.is_empty() {
            return Duration::ZERO;
        }

        let mut sorted = self.latencies.clone();
        sorted.sort_unstable();
        let rank = (quantile.clamp(0.0, 1.0) * sorted.len() as f64).ceil() as usize;
        sorted[rank.saturating_sub(1).min(sorted.len() - 1)]
    }

    ///
    /// The number of requests per second over `elapsed`.
    ///
    pub fn requests_per_second(&self, elapsed: Duration) -> f64 {
        if elapsed.is_zero() {
            return 0.0;
        }

        self.requests as f64 / elapsed.as_secs_f64()
    }
}
