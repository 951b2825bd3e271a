//!
//! The virtual user cycle step.
//!

use std::time::Duration;

///
/// The virtual user cycle step.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// The path to request, if any.
    pub path: Option<String>,
    /// The wait after the request.
    pub wait: Duration,
}

impl Step {
    ///
    /// A step requesting `path`.
    ///
    pub fn request(path: String, wait: Duration) -> Self {
        Self {
            path: Some(path),
            wait,
        }
    }

    ///
    /// A step without a request.
    ///
    pub fn idle(wait: Duration) -> Self {
        Self { path: None, wait }
    }
}
