use std::cmp::Ordering;

use log::warn;

use super::comparator::compare;
use super::types::{DefeatedBy, Ranking, Standing, TieEvent};
use crate::domain::ScoringWeights;

/// Sorts best to worst and stamps dense ranks.
///
/// Ranks only look at neighbours: the next standing shares the current rank
/// when the comparator cannot separate the two, otherwise it gets rank + 1.
/// With head-to-head cycles this grouping is not a clean equivalence
/// partition; that is kept as is.
pub fn rank(
    mut standings: Vec<Standing>,
    defeated_by: &DefeatedBy,
    weights: &ScoringWeights,
) -> Ranking {
    sort_standings(&mut standings, defeated_by, weights);

    let mut ties = Vec::new();
    let mut current_rank = 0;

    for i in 0..standings.len() {
        standings[i].rank = current_rank;

        if let Some(next) = standings.get(i + 1) {
            let current = &standings[i];
            match compare(current, next, defeated_by, weights) {
                Ordering::Equal => {
                    warn!("Tie between {} and {}", current.name, next.name);
                    ties.push(TieEvent {
                        first: current.id,
                        second: next.id,
                        first_name: current.name.clone(),
                        second_name: next.name.clone(),
                        rank: current_rank,
                    });
                }
                _ => current_rank += 1,
            }
        }
    }

    Ranking { standings, ties }
}

// `slice::sort_by` may panic on a comparator that is not a total order, and
// head-to-head cycles (A beat B, B beat C, C beat A) make this one intransitive.
// Insertion sort tolerates that and stays stable; fields are small.
fn sort_standings(
    standings: &mut [Standing],
    defeated_by: &DefeatedBy,
    weights: &ScoringWeights,
) {
    for i in 1..standings.len() {
        let mut j = i;
        while j > 0
            && compare(&standings[j - 1], &standings[j], defeated_by, weights) == Ordering::Greater
        {
            standings.swap(j - 1, j);
            j -= 1;
        }
    }
}
