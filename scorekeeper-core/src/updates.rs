use scorekeeper_types::{Game, GameUpdate};
use tracing::{debug, info};

/// Apply every field present in `update` to `game` and advance `updated_at`.
pub fn apply_game_update(game: &mut Game, update: GameUpdate) {
    if update.changes_nothing() {
        debug!("Update for game {:?} only touches updatedAt", game.id);
    }
    if let Some(name) = update.name {
        game.name = name;
    }
    if let Some(date) = update.date {
        game.date = date;
    }
    if let Some(target_score) = update.target_score {
        game.target_score = target_score;
    }
    if let Some(is_complete) = update.is_complete {
        if is_complete && !game.is_complete {
            info!("Game {:?} marked complete", game.id);
        }
        game.is_complete = is_complete;
    }
    game.updated_at = update.updated_at.max(game.updated_at);
}
