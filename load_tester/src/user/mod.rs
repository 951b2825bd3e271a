//!
//! The virtual user behaviors.
//!

pub mod homepage;
pub mod random_pages;
pub mod rotation;
pub mod single_assignment;
pub mod step;
pub mod wait_time;

use rand::rngs::StdRng;

use self::step::Step;

///
/// The virtual user behavior.
///
/// Every cycle the user performs at most one HTTP GET and then waits.
///
pub trait User: Send {
    ///
    /// Returns the next request to perform and the wait that follows it.
    ///
    fn next_step(&mut self, rng: &mut StdRng) -> Step;
}
