//!
//! The single assignment virtual user.
//!

use std::time::Duration;

use rand::rngs::StdRng;

use crate::pages::Pages;
use crate::user::step::Step;
use crate::user::User;

///
/// Loads one assigned page and then stays idle.
///
/// One user is spawned per page. The page index is handed out by the spawner in
/// creation order, so all pages are requested at once in a single burst.
///
#[derive(Debug, Clone)]
pub struct SingleAssignment {
    /// The assigned page index.
    index: usize,
    /// The assigned page, `None` if the index is past the page list.
    page: Option<String>,
}

impl SingleAssignment {
    /// The wait after the request, far beyond any run duration.
    pub const IDLE: Duration = Duration::from_secs(2000);

    ///
    /// A shortcut constructor.
    ///
    pub fn new(index: usize, pages: &Pages) -> Self {
        Self {
            index,
            page: pages.get(index).map(ToOwned::to_owned),
        }
    }

    ///
    /// Returns the assigned page index.
    ///
    pub fn index(&self) -> usize {
        self.index
    }

    ///
    /// Returns the assigned page.
    ///
    pub fn page(&self) -> Option<&str> {
        self.page.as_deref()
    }
}

impl User for SingleAssignment {
    fn next_step(&mut self, _rng: &mut StdRng) -> Step {
        match self.page.as_ref() {
            Some(page) => Step::request(page.to_owned(), Self::IDLE),
            None => Step::idle(Self::IDLE),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::SingleAssignment;
    use crate::pages::Pages;
    use crate::user::User;

    #[test]
    fn bijection() {
        let pages = Pages::default();
        let users: Vec<SingleAssignment> = (0..pages.len())
            .map(|index| SingleAssignment::new(index, &pages))
            .collect();

        let indices: Vec<usize> = users.iter().map(SingleAssignment::index).collect();
        assert_eq!(indices, (0..pages.len()).collect::<Vec<usize>>());

        let assigned: BTreeSet<&str> = users.iter().filter_map(SingleAssignment::page).collect();
        assert_eq!(assigned.len(), pages.len());
        for (index, user) in users.iter().enumerate() {
            assert_eq!(user.page(), pages.get(index));
        }
    }

    #[test]
    fn requests_assigned_page_then_idles() {
        let pages = Pages::default();
        let mut rng = StdRng::seed_from_u64(0);
        let mut user = SingleAssignment::new(3, &pages);

        let step = user.next_step(&mut rng);
        assert_eq!(step.path.as_deref(), pages.get(3));
        assert_eq!(step.wait, SingleAssignment::IDLE);
    }

    #[test]
    fn unassigned_index() {
        let pages = Pages::default();
        let mut rng = StdRng::seed_from_u64(0);
        let mut user = SingleAssignment::new(pages.len(), &pages);

        assert_eq!(user.page(), None);
        assert_eq!(user.next_step(&mut rng).path, None);
    }
}
