//! Politician storage.
//!
//! The pool holds no policy: it ages, removes, inserts, and counts. Who gets
//! promoted and what counts as attrition is decided by the engine.

use serde::{Deserialize, Serialize};

use crate::ladder::{CareerLadder, Rank, Standing};

/// State for a single politician.
///
/// Politicians have no identity; the pool is a bag of value records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Politician {
    /// Age in years.
    pub age: u32,
    /// Years held at the current standing.
    pub tenure: u32,
    /// Current place on the ladder.
    pub standing: Standing,
    /// Year the apex rank was last attained (`None` if never).
    pub last_apex_year: Option<u32>,
}

impl Politician {
    /// Create a politician of the given age and standing with no tenure.
    #[must_use]
    pub const fn new(age: u32, standing: Standing) -> Self {
        Self {
            age,
            tenure: 0,
            standing,
            last_apex_year: None,
        }
    }

    /// Create a fresh entrant for `ladder`.
    #[must_use]
    pub fn entrant(ladder: &CareerLadder) -> Self {
        Self::new(ladder.entry_age(), Standing::Candidate)
    }

    /// Builder-style tenure override.
    #[must_use]
    pub const fn with_tenure(mut self, tenure: u32) -> Self {
        self.tenure = tenure;
        self
    }

    /// Builder-style apex attainment year.
    #[must_use]
    pub const fn elected_apex_in(mut self, year: u32) -> Self {
        self.last_apex_year = Some(year);
        self
    }

    /// Rank held, if any.
    #[must_use]
    pub const fn rank(&self) -> Option<Rank> {
        self.standing.rank()
    }

    /// Whether this politician holds `rank`.
    #[must_use]
    pub fn holds(&self, rank: Rank) -> bool {
        self.standing == Standing::Seated(rank)
    }

    /// Whether the apex was attained fewer than `cooldown_years` before `year`.
    #[must_use]
    pub fn is_cooling_down(&self, year: u32, cooldown_years: u32) -> bool {
        self.last_apex_year
            .is_some_and(|elected| year.saturating_sub(elected) < cooldown_years)
    }
}

/// The mutable set of politicians in a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AgentPool {
    politicians: Vec<Politician>,
}

impl AgentPool {
    /// Create an empty pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the starting pool: every seat filled by a politician at the
    /// rank's minimum age with no tenure.
    #[must_use]
    pub fn seeded(ladder: &CareerLadder) -> Self {
        let politicians = ladder
            .iter()
            .flat_map(|(rank, spec)| {
                std::iter::repeat_n(
                    Politician::new(spec.min_age, Standing::Seated(rank)),
                    spec.seats,
                )
            })
            .collect();
        Self { politicians }
    }

    /// Number of politicians.
    #[must_use]
    pub fn len(&self) -> usize {
        self.politicians.len()
    }

    /// Whether the pool is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.politicians.is_empty()
    }

    /// Increment every politician's age and tenure by one year.
    pub fn age_all(&mut self) {
        for politician in &mut self.politicians {
            politician.age += 1;
            politician.tenure += 1;
        }
    }

    /// Remove every politician matching `predicate`, returning how many left.
    pub fn remove_if<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&Politician) -> bool,
    {
        let before = self.politicians.len();
        self.politicians.retain(|p| !predicate(p));
        before - self.politicians.len()
    }

    /// Append a politician.
    pub fn insert(&mut self, politician: Politician) {
        self.politicians.push(politician);
    }

    /// Count politicians matching `predicate`.
    #[must_use]
    pub fn count_where<F>(&self, predicate: F) -> usize
    where
        F: Fn(&Politician) -> bool,
    {
        self.politicians.iter().filter(|p| predicate(p)).count()
    }

    /// Number of politicians holding `rank`.
    #[must_use]
    pub fn occupants(&self, rank: Rank) -> usize {
        self.count_where(|p| p.holds(rank))
    }

    /// Occupant count for every rank of a `ranks`-rank ladder, in one pass.
    #[must_use]
    pub fn occupancy(&self, ranks: usize) -> Vec<usize> {
        let mut counts = vec![0; ranks];
        for rank in self.politicians.iter().filter_map(Politician::rank) {
            if let Some(count) = counts.get_mut(rank) {
                *count += 1;
            }
        }
        counts
    }

    /// Ages of every politician holding `rank`.
    #[must_use]
    pub fn ages_at(&self, rank: Rank) -> Vec<u32> {
        self.politicians
            .iter()
            .filter(|p| p.holds(rank))
            .map(|p| p.age)
            .collect()
    }

    /// Iterate over all politicians.
    pub fn iter(&self) -> impl Iterator<Item = &Politician> {
        self.politicians.iter()
    }

    /// Mutable access to one politician by position.
    #[must_use]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Politician> {
        self.politicians.get_mut(index)
    }
}

impl FromIterator<Politician> for AgentPool {
    fn from_iter<I: IntoIterator<Item = Politician>>(iter: I) -> Self {
        Self {
            politicians: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ladder::RankSpec;

    fn ladder() -> CareerLadder {
        let spec = |seats, min_age| RankSpec {
            name: String::new(),
            seats,
            min_age,
            min_tenure: 0,
        };
        CareerLadder::new(vec![spec(3, 30), spec(2, 36), spec(1, 42)], 10).unwrap()
    }

    #[test]
    fn test_seeded_pool_fills_every_seat() {
        let ladder = ladder();
        let pool = AgentPool::seeded(&ladder);

        assert_eq!(pool.len(), 6);
        assert_eq!(pool.occupancy(3), vec![3, 2, 1]);
        assert_eq!(pool.ages_at(1), vec![36, 36]);
        assert!(pool.iter().all(|p| p.tenure == 0 && p.last_apex_year.is_none()));
    }

    #[test]
    fn test_age_all() {
        let mut pool: AgentPool = [
            Politician::new(30, Standing::Candidate),
            Politician::new(50, Standing::Seated(1)).with_tenure(4),
        ]
        .into_iter()
        .collect();

        pool.age_all();

        assert_eq!(pool.politicians[0].age, 31);
        assert_eq!(pool.politicians[0].tenure, 1);
        assert_eq!(pool.politicians[1].age, 51);
        assert_eq!(pool.politicians[1].tenure, 5);
    }

    #[test]
    fn test_remove_if_reports_count() {
        let mut pool: AgentPool = [79, 80, 81, 95]
            .into_iter()
            .map(|age| Politician::new(age, Standing::Seated(0)))
            .collect();

        let removed = pool.remove_if(|p| p.age > 80);

        assert_eq!(removed, 2);
        assert_eq!(pool.len(), 2);
        assert!(pool.iter().all(|p| p.age <= 80));
    }

    #[test]
    fn test_candidates_are_not_occupants() {
        let mut pool = AgentPool::new();
        assert!(pool.is_empty());

        pool.insert(Politician::entrant(&ladder()));
        pool.insert(Politician::new(40, Standing::Seated(0)));

        assert_eq!(pool.occupants(0), 1);
        assert_eq!(pool.count_where(|p| p.standing == Standing::Candidate), 1);
        assert_eq!(pool.occupancy(3), vec![1, 0, 0]);
    }

    #[test]
    fn test_cooling_down() {
        let consul = Politician::new(50, Standing::Seated(2)).elected_apex_in(5);

        assert!(consul.is_cooling_down(5, 10));
        assert!(consul.is_cooling_down(14, 10));
        assert!(!consul.is_cooling_down(15, 10));
        assert!(!Politician::new(50, Standing::Seated(2)).is_cooling_down(1, 10));
    }
}
