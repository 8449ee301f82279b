use crate::errors::{CoreError, Result};
use crate::ids::IdSource;
use scorekeeper_types::{Game, Round, RoundCreate, RoundUpdate, Score};
use std::collections::HashSet;
use tracing::debug;

/// Every score must belong to a player of `game`, at most once.
pub fn check_scores(game: &Game, scores: &[Score]) -> Result<()> {
    let mut seen = HashSet::new();
    for score in scores {
        if game.player(&score.player_id).is_none() {
            return Err(CoreError::UnknownPlayer {
                player_id: score.player_id.clone(),
            });
        }
        if !seen.insert(score.player_id.as_str()) {
            return Err(CoreError::DuplicateScore {
                player_id: score.player_id.clone(),
            });
        }
    }
    Ok(())
}

pub fn new_round(game: &Game, ids: &impl IdSource, create: RoundCreate) -> Result<Round> {
    check_scores(game, &create.scores)?;
    let round = Round::new(ids.next_id(), create.scores);
    debug!(
        "Created round {} with {} scores",
        round.id,
        round.scores.len()
    );
    Ok(round)
}

/// Replace all scores of `round`. Leaves `round` untouched on error.
pub fn apply_round_update(game: &Game, round: &mut Round, update: RoundUpdate) -> Result<()> {
    check_scores(game, &update.scores)?;
    round.scores = update.scores;
    round.updated_at = update.updated_at.max(round.updated_at);
    debug!("Replaced scores of round {}", round.id);
    Ok(())
}
