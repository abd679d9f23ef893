use std::cmp::Ordering;

use super::types::{DefeatedBy, Standing};
use crate::domain::ScoringWeights;

/// Tie-break cascade. `Less` means `a` ranks ahead of `b`.
///
/// 1. match wins
/// 2. head-to-head, only when exactly one side beat the other
/// 3. game wins
/// 4. weighted points
pub fn compare(
    a: &Standing,
    b: &Standing,
    defeated_by: &DefeatedBy,
    weights: &ScoringWeights,
) -> Ordering {
    b.wins
        .cmp(&a.wins)
        .then_with(|| head_to_head(a, b, defeated_by))
        .then_with(|| b.game_wins.cmp(&a.game_wins))
        .then_with(|| points(b, weights).total_cmp(&points(a, weights)))
}

fn head_to_head(a: &Standing, b: &Standing, defeated_by: &DefeatedBy) -> Ordering {
    let a_beat_b = defeated_by.has_beaten(a.id, b.id);
    let b_beat_a = defeated_by.has_beaten(b.id, a.id);

    match (a_beat_b, b_beat_a) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => Ordering::Equal,
    }
}

fn points(standing: &Standing, weights: &ScoringWeights) -> f64 {
    weights.points(standing.wins, standing.ties, standing.game_wins)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standing(id: i64, wins: u32, ties: u32, game_wins: u32) -> Standing {
        Standing {
            wins,
            ties,
            game_wins,
            ..Standing::new(id, format!("p{id}"))
        }
    }

    #[test]
    fn test_more_wins_first() {
        let a = standing(1, 3, 0, 0);
        let b = standing(2, 2, 0, 9);
        let weights = ScoringWeights::default();
        assert_eq!(compare(&a, &b, &DefeatedBy::new(), &weights), Ordering::Less);
        assert_eq!(compare(&b, &a, &DefeatedBy::new(), &weights), Ordering::Greater);
    }

    #[test]
    fn test_head_to_head_beats_game_wins() {
        let a = standing(1, 2, 0, 4);
        let b = standing(2, 2, 0, 6);
        let mut defeated_by = DefeatedBy::new();
        defeated_by.record(1, 2);

        let weights = ScoringWeights::default();
        assert_eq!(compare(&a, &b, &defeated_by, &weights), Ordering::Less);
        assert_eq!(compare(&b, &a, &defeated_by, &weights), Ordering::Greater);
    }

    #[test]
    fn test_mutual_defeats_fall_through_to_game_wins() {
        let a = standing(1, 2, 0, 4);
        let b = standing(2, 2, 0, 6);
        let mut defeated_by = DefeatedBy::new();
        defeated_by.record(1, 2);
        defeated_by.record(2, 1);

        let weights = ScoringWeights::default();
        assert_eq!(compare(&a, &b, &defeated_by, &weights), Ordering::Greater);
    }

    #[test]
    fn test_points_decide_last() {
        // equal wins and game wins, ties only visible through points
        let a = standing(1, 1, 2, 3);
        let b = standing(2, 1, 0, 3);
        let weights = ScoringWeights::default();
        assert_eq!(compare(&a, &b, &DefeatedBy::new(), &weights), Ordering::Less);
    }

    #[test]
    fn test_indistinguishable_is_equal() {
        let a = standing(1, 1, 1, 3);
        let b = standing(2, 1, 1, 3);
        let weights = ScoringWeights::default();
        assert_eq!(compare(&a, &b, &DefeatedBy::new(), &weights), Ordering::Equal);
    }
}
