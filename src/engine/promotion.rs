//! Eligibility and seat-constrained promotion.
//!
//! Eligibility is computed once, before any promotion, so nobody climbs two
//! rungs in the same year. Ranks are then filled from the apex down: seats
//! vacated by promotions into a higher rank are open to the rank below in the
//! same pass.

use crate::ladder::{CareerLadder, Standing};
use crate::pool::AgentPool;
use crate::rng::SimRng;

/// Pool positions of every politician eligible for promotion, grouped by
/// target rank.
///
/// A candidate targets rank 0, a seated politician the rank above; apex
/// holders are never eligible.
#[must_use]
pub fn eligibility(ladder: &CareerLadder, pool: &AgentPool) -> Vec<Vec<usize>> {
    let mut groups = vec![Vec::new(); ladder.len()];
    for (index, politician) in pool.iter().enumerate() {
        let Some(target) = politician.standing.next_rank(ladder.len()) else {
            continue;
        };
        if ladder.admits(target, politician.age, politician.tenure) {
            groups[target].push(index);
        }
    }
    groups
}

/// Fill vacancies for `year`, breaking ties uniformly at random.
///
/// Returns the number of promotions into each rank.
pub fn promote(
    ladder: &CareerLadder,
    pool: &mut AgentPool,
    rng: &mut SimRng,
    year: u32,
    reset_tenure: bool,
) -> Vec<usize> {
    let mut candidates = eligibility(ladder, pool);
    let mut occupancy = pool.occupancy(ladder.len());
    let mut promoted = vec![0; ladder.len()];

    for target in (0..ladder.len()).rev() {
        let vacancies = ladder.seats(target).saturating_sub(occupancy[target]);
        let group = &mut candidates[target];
        if vacancies == 0 || group.is_empty() {
            continue;
        }

        rng.shuffle(group);
        for &index in group.iter().take(vacancies) {
            let Some(politician) = pool.get_mut(index) else {
                continue;
            };
            if let Some(from) = politician.rank() {
                occupancy[from] -= 1;
            }
            politician.standing = Standing::Seated(target);
            if reset_tenure {
                politician.tenure = 0;
            }
            if ladder.is_apex(target) {
                politician.last_apex_year = Some(year);
            }
            occupancy[target] += 1;
            promoted[target] += 1;
        }
    }

    promoted
}
