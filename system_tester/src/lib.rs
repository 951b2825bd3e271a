//!
//! The documentation site generator system testing library.
//!

pub mod cli;
pub mod fixture;
pub mod health;
pub mod html;
pub mod scenario;
pub mod serve;
pub mod summary;

pub use crate::cli::Mkdocs;
pub use crate::fixture::config::Config as FixtureConfig;
pub use crate::fixture::config::NavEntry as FixtureNavEntry;
pub use crate::fixture::Project as FixtureProject;
pub use crate::health::HealthCheck;
pub use crate::health::Response as HealthResponse;
pub use crate::scenario::context::Context as ScenarioContext;
pub use crate::scenario::Scenario;
pub use crate::serve::ServeProcess;
pub use crate::summary::outcome::Outcome;
pub use crate::summary::Summary;

/// The successful process exit code.
pub const EXIT_CODE_SUCCESS: i32 = 0;

/// The failed process exit code.
pub const EXIT_CODE_FAILURE: i32 = 1;

/// The default development server address.
pub const DEFAULT_SERVE_ADDRESS: &str = "127.0.0.1:8000";
