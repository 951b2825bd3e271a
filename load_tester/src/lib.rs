//!
//! The documentation site load tester library.
//!

pub mod engine;
pub mod pages;
pub mod scenario;
pub mod shape;
pub mod statistics;
pub mod user;

pub use self::engine::report::Report as EngineReport;
pub use self::engine::Engine;
pub use self::engine::UserFactory;
pub use self::pages::Pages;
pub use self::scenario::Scenario;
pub use self::shape::schedule::Schedule;
pub use self::shape::stage::Stage;
pub use self::shape::target::Target;
pub use self::shape::Shape;
pub use self::statistics::Statistics;
pub use self::user::homepage::Homepage;
pub use self::user::random_pages::RandomPages;
pub use self::user::rotation::Rotation;
pub use self::user::single_assignment::SingleAssignment;
pub use self::user::step::Step;
pub use self::user::wait_time::WaitTime;
pub use self::user::User;

/// The successful process exit code.
pub const EXIT_CODE_SUCCESS: i32 = 0;

/// The failed process exit code.
pub const EXIT_CODE_FAILURE: i32 = 1;
