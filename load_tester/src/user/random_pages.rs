//!
//! The randomized multi-page virtual user.
//!

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::pages::Pages;
use crate::user::homepage::Homepage;
use crate::user::step::Step;
use crate::user::wait_time::WaitTime;
use crate::user::User;

///
/// Either requests the homepage or reads a random page, with equal probability.
///
#[derive(Debug, Clone)]
pub struct RandomPages {
    /// The pages to choose from.
    pages: Arc<Pages>,
    /// The wait after each cycle.
    wait_time: WaitTime,
    /// The additional time spent reading a random page.
    reading_time: WaitTime,
}

impl RandomPages {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(pages: Arc<Pages>, wait_time: WaitTime, reading_time: WaitTime) -> Self {
        Self {
            pages,
            wait_time,
            reading_time,
        }
    }

    ///
    /// A user thinking for 1 to 3 seconds and reading pages for 0.5 to 2 seconds.
    ///
    /// The homepage is removed from the pages, so it is only requested by the
    /// homepage task, unless it is the only page.
    ///
    pub fn stress(pages: Arc<Pages>) -> Self {
        let pages = match pages.without(Homepage::PATH) {
            Some(other_pages) => Arc::new(other_pages),
            None => pages,
        };
        Self::new(
            pages,
            WaitTime::between(1.0, 3.0),
            WaitTime::between(0.5, 2.0),
        )
    }

    ///
    /// Returns the pages the page task chooses from.
    ///
    pub fn pages(&self) -> &Pages {
        self.pages.as_ref()
    }
}

impl User for RandomPages {
    fn next_step(&mut self, rng: &mut StdRng) -> Step {
        if rng.gen_bool(0.5) {
            return Step::request(Homepage::PATH.to_owned(), self.wait_time.sample(rng));
        }

        let page = self
            .pages
            .as_slice()
            .choose(rng)
            .cloned()
            .unwrap_or_else(|| Homepage::PATH.to_owned());
        let wait = self.reading_time.sample(rng) + self.wait_time.sample(rng);
        Step::request(page, wait)
    }
}
