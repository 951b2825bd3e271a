//!
//! The aggregated build test sample.
//!

use serde::Deserialize;
use serde::Serialize;

use crate::build::measurement::Measurement;
use crate::build::test::Test;

///
/// The aggregated build test sample.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// The build test label.
    pub test: String,
    /// The mean duration in seconds.
    pub avg_time_seconds: f64,
    /// The mean peak memory in megabytes.
    pub avg_memory_mb: f64,
    /// The shortest duration in seconds.
    pub min_time: f64,
    /// The longest duration in seconds.
    pub max_time: f64,
    /// Whether the last measured run succeeded.
    pub success: bool,
}

impl Sample {
    ///
    /// Aggregates the measured runs of `test`.
    ///
    /// Returns `None` if there are no measurements.
    ///
    pub fn from_measurements(test: Test, measurements: &[Measurement]) -> Option<Self> {
        let last = measurements.last()?;

        let times: Vec<f64> = measurements
            .iter()
            .map(|measurement| measurement.elapsed.as_secs_f64())
            .collect();
        let memories: Vec<f64> = measurements
            .iter()
            .map(|measurement| crate::util::bytes_to_megabytes(measurement.peak_memory_bytes))
            .collect();

        let min_time = times.iter().copied().fold(f64::INFINITY, f64::min);
        let max_time = times.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Some(Self {
            test: test.label().to_owned(),
            avg_time_seconds: crate::util::round2(crate::util::mean(times.as_slice())?),
            avg_memory_mb: crate::util::round2(crate::util::mean(memories.as_slice())?),
            min_time: crate::util::round2(min_time),
            max_time: crate::util::round2(max_time),
            success: last.success,
        })
    }
}
