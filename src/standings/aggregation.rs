use std::collections::HashMap;

use log::{debug, warn};

use super::types::{DefeatedBy, ParticipantId, Standing};
use crate::domain::{Match, Participant};
use crate::errors::StandingsError;

/// Folds matches into one standing per participant, in participant order
pub fn aggregate(
    participants: &[Participant],
    matches: &[Match],
) -> Result<(Vec<Standing>, DefeatedBy), StandingsError> {
    debug!(
        "Aggregating {} matches for {} participants",
        matches.len(),
        participants.len()
    );

    let mut standings = create_standings(participants);
    let index = build_index(&standings)?;
    let mut defeated_by = DefeatedBy::new();

    for match_data in matches {
        let a = resolve(&index, match_data, match_data.player_a)?;
        let b = resolve(&index, match_data, match_data.player_b)?;

        apply_outcome(&mut standings, &mut defeated_by, match_data, a, b);
        apply_games(&mut standings, match_data, a, b)?;
    }

    Ok((standings, defeated_by))
}

fn create_standings(participants: &[Participant]) -> Vec<Standing> {
    participants
        .iter()
        .map(|p| Standing::new(p.id, p.name.clone()))
        .collect()
}

fn build_index(standings: &[Standing]) -> Result<HashMap<ParticipantId, usize>, StandingsError> {
    let mut index = HashMap::with_capacity(standings.len());
    for (idx, standing) in standings.iter().enumerate() {
        if index.insert(standing.id, idx).is_some() {
            return Err(StandingsError::DuplicateParticipant {
                participant_id: standing.id,
            });
        }
    }
    Ok(index)
}

fn resolve(
    index: &HashMap<ParticipantId, usize>,
    match_data: &Match,
    participant_id: ParticipantId,
) -> Result<usize, StandingsError> {
    index
        .get(&participant_id)
        .copied()
        .ok_or(StandingsError::UnknownParticipant {
            match_id: match_data.id,
            participant_id,
        })
}

fn apply_outcome(
    standings: &mut [Standing],
    defeated_by: &mut DefeatedBy,
    match_data: &Match,
    a: usize,
    b: usize,
) {
    let (a_id, b_id) = (standings[a].id, standings[b].id);

    match match_data.winner {
        Some(winner) if winner == a_id => {
            standings[a].wins += 1;
            defeated_by.record(a_id, b_id);
        }
        Some(winner) if winner == b_id => {
            standings[b].wins += 1;
            defeated_by.record(b_id, a_id);
        }
        other => {
            if let Some(winner) = other {
                warn!(
                    "Match {} names winner {} who did not play in it, counting as a tie",
                    match_data.id, winner
                );
            }
            standings[a].ties += 1;
            standings[b].ties += 1;
        }
    }
}

// Game wins accrue to both sides whatever the match outcome
fn apply_games(
    standings: &mut [Standing],
    match_data: &Match,
    a: usize,
    b: usize,
) -> Result<(), StandingsError> {
    add_game_wins(&mut standings[a], match_data.id, match_data.score.first)?;
    add_game_wins(&mut standings[b], match_data.id, match_data.score.second)
}

fn add_game_wins(standing: &mut Standing, match_id: i64, games: u32) -> Result<(), StandingsError> {
    standing.game_wins = standing
        .game_wins
        .checked_add(games)
        .ok_or(StandingsError::GameWinsOverflow {
            match_id,
            participant_id: standing.id,
        })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ScorePair;

    fn players(n: i64) -> Vec<Participant> {
        (1..=n).map(|id| Participant::new(id, format!("player{id}"))).collect()
    }

    fn game(id: i64, a: i64, b: i64, winner: Option<i64>, score: (u32, u32)) -> Match {
        Match {
            id,
            player_a: a,
            player_b: b,
            winner,
            score: ScorePair::new(score.0, score.1),
        }
    }

    #[test]
    fn test_empty_input_gives_empty_output() {
        let (standings, defeated_by) = aggregate(&[], &[]).unwrap();
        assert!(standings.is_empty());
        assert!(defeated_by.is_empty());
    }

    #[test]
    fn test_win_counts_games_and_records_defeat() {
        let (standings, defeated_by) =
            aggregate(&players(2), &[game(1, 1, 2, Some(1), (2, 1))]).unwrap();

        assert_eq!(standings[0].wins, 1);
        assert_eq!(standings[0].game_wins, 2);
        assert_eq!(standings[1].wins, 0);
        assert_eq!(standings[1].game_wins, 1);
        assert!(defeated_by.has_beaten(1, 2));
        assert!(!defeated_by.has_beaten(2, 1));
        assert_eq!(defeated_by.beaten_by(1).map(|s| s.len()), Some(1));
    }

    #[test]
    fn test_game_win_overflow_is_fatal() {
        let matches = [
            game(1, 1, 2, Some(1), (3_000_000_000, 0)),
            game(2, 1, 2, Some(1), (3_000_000_000, 0)),
        ];
        let err = aggregate(&players(2), &matches).unwrap_err();
        assert_eq!(
            err,
            StandingsError::GameWinsOverflow {
                match_id: 2,
                participant_id: 1,
            }
        );
    }

    #[test]
    fn test_tie_increments_ties_only() {
        let (standings, defeated_by) =
            aggregate(&players(2), &[game(1, 1, 2, None, (1, 1))]).unwrap();

        for standing in &standings {
            assert_eq!(standing.ties, 1);
            assert_eq!(standing.wins, 0);
            assert_eq!(standing.losses, 0);
            assert_eq!(standing.game_ties, 0);
        }
        assert!(defeated_by.is_empty());
    }

    #[test]
    fn test_winner_not_in_match_counts_as_tie() {
        let (standings, _) = aggregate(&players(3), &[game(1, 1, 2, Some(3), (0, 0))]).unwrap();
        assert_eq!(standings[0].ties, 1);
        assert_eq!(standings[1].ties, 1);
        assert_eq!(standings[2].ties, 0);
    }

    #[test]
    fn test_game_wins_follow_listed_order_not_winner() {
        // player 2 listed first, player 1 wins
        let (standings, _) = aggregate(&players(2), &[game(1, 2, 1, Some(1), (1, 2))]).unwrap();
        assert_eq!(standings[0].game_wins, 2);
        assert_eq!(standings[1].game_wins, 1);
    }

    #[test]
    fn test_unknown_participant_is_fatal() {
        let err = aggregate(&players(2), &[game(17, 1, 9, Some(1), (2, 0))]).unwrap_err();
        assert_eq!(
            err,
            StandingsError::UnknownParticipant {
                match_id: 17,
                participant_id: 9,
            }
        );
    }

    #[test]
    fn test_duplicate_participant_is_fatal() {
        let mut participants = players(2);
        participants.push(Participant::new(2, "again"));
        let err = aggregate(&participants, &[]).unwrap_err();
        assert_eq!(err, StandingsError::DuplicateParticipant { participant_id: 2 });
    }

    #[test]
    fn test_inputs_keep_participant_order() {
        let participants = vec![
            Participant::new(30, "c"),
            Participant::new(10, "a"),
            Participant::new(20, "b"),
        ];
        let (standings, _) = aggregate(&participants, &[]).unwrap();
        let ids: Vec<_> = standings.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![30, 10, 20]);
    }
}
