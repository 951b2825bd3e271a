//!
//! The scenario outcome.
//!

use std::time::Duration;

///
/// The scenario outcome.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The scenario has passed.
    Passed {
        /// The scenario duration.
        duration: Duration,
    },
    /// The scenario has failed.
    Failed {
        /// The failure description.
        error: String,
    },
}

impl Outcome {
    ///
    /// A shortcut constructor.
    ///
    pub fn passed(duration: Duration) -> Self {
        Self::Passed { duration }
    }

    ///
    /// A shortcut constructor.
    ///
    pub fn failed<S>(error: S) -> Self
    where
        S: ToString,
    {
        Self::Failed {
            error: error.to_string(),
        }
    }
}
