//!
//! The homepage virtual user.
//!

use rand::rngs::StdRng;

use crate::user::step::Step;
use crate::user::wait_time::WaitTime;
use crate::user::User;

///
/// Requests the site root every cycle.
///
#[derive(Debug, Clone)]
pub struct Homepage {
    /// The wait after each request.
    wait_time: WaitTime,
}

impl Homepage {
    /// The requested path.
    pub const PATH: &'static str = "/";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(wait_time: WaitTime) -> Self {
        Self { wait_time }
    }
}

impl Default for Homepage {
    fn default() -> Self {
        Self::new(WaitTime::between(1.0, 2.0))
    }
}

impl User for Homepage {
    fn next_step(&mut self, rng: &mut StdRng) -> Step {
        Step::request(Self::PATH.to_owned(), self.wait_time.sample(rng))
    }
}
