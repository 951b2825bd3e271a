//!
//! The traffic shape target.
//!

use serde::Deserialize;
use serde::Serialize;

///
/// The number of concurrent users to reach and the rate to spawn them at.
///
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Target {
    /// The number of concurrent users.
    pub users: usize,
    /// The number of users spawned or stopped per second.
    pub spawn_rate: f64,
}

impl Target {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(users: usize, spawn_rate: f64) -> Self {
        Self { users, spawn_rate }
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} users at {:.1}/s", self.users, self.spawn_rate)
    }
}
