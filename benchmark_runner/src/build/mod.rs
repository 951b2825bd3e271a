//!
//! The documentation site build benchmarking.
//!

pub mod measurement;
pub mod runner;
pub mod sample;
pub mod test;
