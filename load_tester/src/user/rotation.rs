//!
//! The sequential rotation virtual user.
//!

use std::sync::Arc;

use rand::rngs::StdRng;

use crate::pages::Pages;
use crate::user::step::Step;
use crate::user::wait_time::WaitTime;
use crate::user::User;

///
/// Visits the pages one after another, wrapping around at the end, with long
/// pauses emulating a reader going through the documentation.
///
#[derive(Debug, Clone)]
pub struct Rotation {
    /// The visited pages.
    pages: Arc<Pages>,
    /// The index of the next page.
    cursor: usize,
    /// The wait after each request.
    wait_time: WaitTime,
}

impl Rotation {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(pages: Arc<Pages>, wait_time: WaitTime) -> Self {
        Self {
            pages,
            cursor: 0,
            wait_time,
        }
    }

    ///
    /// A user reading each page for 30 to 60 seconds.
    ///
    pub fn reader(pages: Arc<Pages>) -> Self {
        Self::new(pages, WaitTime::between(30.0, 60.0))
    }

    ///
    /// Returns the index of the next page.
    ///
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

impl User for Rotation {
    fn next_step(&mut self, rng: &mut StdRng) -> Step {
        let path = self.pages.get(self.cursor).map(ToOwned::to_owned);

        self.cursor += 1;
        if self.cursor >= self.pages.len() {
            self.cursor = 0;
        }

        let wait = self.wait_time.sample(rng);
        match path {
            Some(path) => Step::request(path, wait),
            None => Step::idle(wait),
        }
    }
}
