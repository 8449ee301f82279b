//! Running totals and the "target reached" signal.
//!
//! Nothing here ends a game; callers decide whether to set `isComplete`.

use scorekeeper_types::{Game, Player};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerTotal<'a> {
    pub player: &'a Player,
    pub total: i64,
}

/// Cumulative score of every player over the loaded rounds, in player order.
/// A round without an entry for a player adds nothing for that player.
pub fn totals(game: &Game) -> Vec<PlayerTotal<'_>> {
    game.players
        .iter()
        .map(|player| PlayerTotal {
            player,
            total: game
                .rounds
                .iter()
                .filter_map(|round| round.score_of(&player.id))
                .map(i64::from)
                .sum(),
        })
        .collect()
}

/// Players whose total has reached or passed the target score.
pub fn players_at_target(game: &Game) -> Vec<PlayerTotal<'_>> {
    let target = i64::from(game.target_score);
    totals(game)
        .into_iter()
        .filter(|t| t.total >= target)
        .collect()
}

pub fn target_reached(game: &Game) -> bool {
    !players_at_target(game).is_empty()
}

/// Players sharing the highest total. Empty for a game without players.
pub fn leaders(game: &Game) -> Vec<PlayerTotal<'_>> {
    let totals = totals(game);
    let Some(best) = totals.iter().map(|t| t.total).max() else {
        return Vec::new();
    };
    totals.into_iter().filter(|t| t.total == best).collect()
}
