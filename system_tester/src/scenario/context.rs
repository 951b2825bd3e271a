//!
//! The shared scenario context.
//!

use crate::cli::Mkdocs;
use crate::health::HealthCheck;

///
/// The shared scenario context.
///
#[derive(Debug, Clone)]
pub struct Context {
    /// The generator CLI.
    pub mkdocs: Mkdocs,
    /// The address the development server listens on.
    pub serve_address: String,
    /// The development server readiness check.
    pub health_check: HealthCheck,
}

impl Context {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(mkdocs: Mkdocs, serve_address: String, health_check: HealthCheck) -> Self {
        Self {
            mkdocs,
            serve_address,
            health_check,
        }
    }
}
