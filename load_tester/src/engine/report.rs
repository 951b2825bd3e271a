//!
//! The load engine run report.
//!

use std::time::Duration;

///
/// The load engine run report.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    /// The total number of spawned users.
    pub spawned: usize,
    /// The maximal number of concurrently running users.
    pub peak_users: usize,
    /// The run duration.
    pub elapsed: Duration,
}
