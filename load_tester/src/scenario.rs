//!
//! The load test scenario.
//!

use std::sync::Arc;
use std::time::Duration;

use crate::pages::Pages;
use crate::shape::schedule::Schedule;
use crate::user::homepage::Homepage;
use crate::user::random_pages::RandomPages;
use crate::user::rotation::Rotation;
use crate::user::single_assignment::SingleAssignment;
use crate::user::User;

///
/// The load test scenario: a virtual user behavior with its default traffic shape.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    /// Homepage users following the spike schedule.
    #[default]
    Spike,
    /// Homepage users at a constant concurrency.
    Homepage,
    /// Users reading the pages in order.
    Sequential,
    /// One user per page, all pages loaded at once.
    Burst,
    /// Users randomly alternating between the homepage and other pages.
    Stress,
}

impl Scenario {
    ///
    /// Creates the virtual user with the spawn index.
    ///
    pub fn create_user(self, index: usize, pages: &Arc<Pages>) -> Box<dyn User> {
        match self {
            Self::Spike | Self::Homepage => Box::new(Homepage::default()),
            Self::Sequential => Box::new(Rotation::reader(pages.clone())),
            Self::Burst => Box::new(SingleAssignment::new(index, pages.as_ref())),
            Self::Stress => Box::new(RandomPages::stress(pages.clone())),
        }
    }

    ///
    /// Returns the traffic shape of the scenario.
    ///
    /// The spike scenario has a fixed schedule. The others hold the requested
    /// number of users for `run_time`. The burst scenario spawns one user per
    /// page at once by default.
    ///
    pub fn schedule(
        self,
        users: Option<usize>,
        spawn_rate: Option<f64>,
        run_time: Duration,
        pages: &Pages,
    ) -> anyhow::Result<Schedule> {
        match self {
            Self::Spike => Ok(Schedule::spike()),
            Self::Burst => Schedule::constant(
                users.unwrap_or(pages.len()),
                spawn_rate.unwrap_or(pages.len() as f64),
                run_time,
            ),
            Self::Homepage | Self::Sequential | Self::Stress => {
                Schedule::constant(users.unwrap_or(1), spawn_rate.unwrap_or(1.0), run_time)
            }
        }
    }
}

impl std::str::FromStr for Scenario {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.to_lowercase().as_str() {
            "spike" => Ok(Self::Spike),
            "homepage" => Ok(Self::Homepage),
            "sequential" => Ok(Self::Sequential),
            "burst" => Ok(Self::Burst),
            "stress" => Ok(Self::Stress),
            string => anyhow::bail!(
                "Unknown scenario `{string}`. Supported scenarios: {}",
                [
                    Self::Spike,
                    Self::Homepage,
                    Self::Sequential,
                    Self::Burst,
                    Self::Stress
                ]
                .into_iter()
                .map(|scenario| scenario.to_string())
                .collect::<Vec<String>>()
                .join(", ")
            ),
        }
    }
}

impl std::fmt::Display for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Spike => write!(f, "spike"),
            Self::Homepage => write!(f, "homepage"),
            Self::Sequential => write!(f, "sequential"),
            Self::Burst => write!(f, "burst"),
            Self::Stress => write!(f, "stress"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::Scenario;
    use crate::pages::Pages;
    use crate::shape::target::Target;
    use crate::shape::Shape;

    #[test]
    fn parse() {
        assert_eq!("Spike".parse::<Scenario>().ok(), Some(Scenario::Spike));
        assert_eq!("burst".parse::<Scenario>().ok(), Some(Scenario::Burst));
        assert!("soak".parse::<Scenario>().is_err());
        assert_eq!(Scenario::Stress.to_string(), "stress");
    }

    #[test]
    fn burst_defaults_to_page_count() {
        let pages = Pages::default();
        let schedule = Scenario::Burst
            .schedule(None, None, Duration::from_secs(10), &pages)
            .expect("Valid schedule");

        assert_eq!(
            schedule.tick(Duration::ZERO),
            Some(Target::new(pages.len(), pages.len() as f64))
        );
    }

    #[test]
    fn spike_ignores_overrides() {
        let pages = Pages::default();
        let schedule = Scenario::Spike
            .schedule(Some(3), Some(3.0), Duration::from_secs(10), &pages)
            .expect("Valid schedule");

        assert_eq!(schedule.tick(Duration::ZERO), Some(Target::new(25, 25.0)));
    }

    #[test]
    fn burst_users_cover_pages() {
        let pages = Arc::new(Pages::default());
        let mut rng = StdRng::seed_from_u64(0);

        let requested: Vec<Option<String>> = (0..pages.len())
            .map(|index| Scenario::Burst.create_user(index, &pages).next_step(&mut rng).path)
            .collect();
        let expected: Vec<Option<String>> = pages.as_slice().iter().cloned().map(Some).collect();
        assert_eq!(requested, expected);
    }
}
