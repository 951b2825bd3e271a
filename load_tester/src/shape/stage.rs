//!
//! The traffic shape schedule stage.
//!

use serde::Deserialize;
use serde::Serialize;

use crate::shape::target::Target;

///
/// The traffic shape schedule stage.
///
/// The stage is active while the elapsed run time is below `until`.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stage {
    /// The exclusive elapsed time threshold, in seconds.
    pub until: f64,
    /// The number of concurrent users.
    pub users: usize,
    /// The number of users spawned or stopped per second.
    pub spawn_rate: f64,
}

impl Stage {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(until: f64, users: usize, spawn_rate: f64) -> Self {
        Self {
            until,
            users,
            spawn_rate,
        }
    }

    ///
    /// Whether the stage is active at `seconds` of elapsed run time.
    ///
    pub fn is_active(&self, seconds: f64) -> bool {
        seconds < self.until
    }

    ///
    /// Returns the stage target.
    ///
    pub fn target(&self) -> Target {
        Target::new(self.users, self.spawn_rate)
    }
}
