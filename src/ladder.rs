//! The career ladder: ranks, seats, and entry requirements.
//!
//! Rank is data, not type. A ladder is an ordered table indexed by rank,
//! rank 0 being the entry office and the last rank the apex office.

use serde::{Deserialize, Serialize};

/// Index of a rank in the ladder (0 = entry office).
pub type Rank = usize;

/// Where a politician currently stands on the ladder.
///
/// Entrants start as candidates and win an entry-level seat through the same
/// seat-constrained promotion as every other rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Standing {
    /// Not yet holding any office.
    Candidate,
    /// Holding an office of the given rank.
    Seated(Rank),
}

impl Standing {
    /// The rank held, if any.
    #[must_use]
    pub const fn rank(self) -> Option<Rank> {
        match self {
            Standing::Candidate => None,
            Standing::Seated(rank) => Some(rank),
        }
    }

    /// The rank this standing can be promoted into on a ladder of `ranks` ranks.
    ///
    /// Apex holders have nowhere further to go.
    #[must_use]
    pub const fn next_rank(self, ranks: usize) -> Option<Rank> {
        let next = match self {
            Standing::Candidate => 0,
            Standing::Seated(rank) => rank + 1,
        };
        if next < ranks { Some(next) } else { None }
    }
}

/// Capacity and entry requirements for one rank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankSpec {
    /// Display name of the office.
    pub name: String,
    /// Number of seats at this rank.
    pub seats: usize,
    /// Minimum age to enter this rank.
    pub min_age: u32,
    /// Years required at the standing directly below before entering this rank.
    pub min_tenure: u32,
}

/// Immutable ladder configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerLadder {
    ranks: Vec<RankSpec>,
    apex_cooldown_years: u32,
}

impl CareerLadder {
    /// Create a ladder from its rank table.
    ///
    /// Returns `None` if `ranks` is empty.
    #[must_use]
    pub fn new(ranks: Vec<RankSpec>, apex_cooldown_years: u32) -> Option<Self> {
        if ranks.is_empty() {
            return None;
        }
        Some(Self {
            ranks,
            apex_cooldown_years,
        })
    }

    /// Number of ranks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    /// Always false: a ladder has at least one rank.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    /// The apex rank.
    #[must_use]
    pub fn apex(&self) -> Rank {
        self.ranks.len() - 1
    }

    /// Whether `rank` is the apex rank.
    #[must_use]
    pub fn is_apex(&self, rank: Rank) -> bool {
        rank == self.apex()
    }

    /// Spec for a rank.
    #[must_use]
    pub fn get(&self, rank: Rank) -> Option<&RankSpec> {
        self.ranks.get(rank)
    }

    /// Seats at `rank` (0 for ranks off the ladder).
    #[must_use]
    pub fn seats(&self, rank: Rank) -> usize {
        self.ranks.get(rank).map_or(0, |spec| spec.seats)
    }

    /// Age at which entrants are created.
    #[must_use]
    pub fn entry_age(&self) -> u32 {
        self.ranks[0].min_age
    }

    /// Years after attaining the apex during which holding it is penalized.
    #[must_use]
    pub const fn apex_cooldown_years(&self) -> u32 {
        self.apex_cooldown_years
    }

    /// Whether someone of `age` with `tenure` years at their current standing
    /// meets the requirements to enter `rank`.
    #[must_use]
    pub fn admits(&self, rank: Rank, age: u32, tenure: u32) -> bool {
        self.ranks
            .get(rank)
            .is_some_and(|spec| age >= spec.min_age && tenure >= spec.min_tenure)
    }

    /// Iterate over `(rank, spec)` pairs from entry to apex.
    pub fn iter(&self) -> impl Iterator<Item = (Rank, &RankSpec)> {
        self.ranks.iter().enumerate()
    }
}
