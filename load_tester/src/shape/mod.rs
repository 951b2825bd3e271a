//!
//! The traffic shape controller.
//!

pub mod schedule;
pub mod stage;
pub mod target;

use std::time::Duration;

use self::target::Target;

///
/// The traffic shape controller.
///
/// Maps the elapsed run time to the desired number of concurrent users and
/// their spawn rate. The load engine polls it once per tick.
///
pub trait Shape: Send + Sync {
    ///
    /// Returns the target for the elapsed run time, or `None` if the run must stop.
    ///
    fn tick(&self, elapsed: Duration) -> Option<Target>;
}
