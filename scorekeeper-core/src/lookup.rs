use crate::errors::{CoreError, Result};
use scorekeeper_types::{Game, GamesResponse};
use tracing::{debug, warn};

pub fn ensure_tenant(game: &Game, tenant_id: &str) -> Result<()> {
    if game.tenant_id == tenant_id {
        Ok(())
    } else {
        warn!("Game {:?} requested from tenant {}", game.id, tenant_id);
        Err(CoreError::TenantMismatch)
    }
}

/// Games of `tenant_id` that `user_id` created or plays in, in input order.
pub fn games_involving(
    games: impl IntoIterator<Item = Game>,
    tenant_id: &str,
    user_id: &str,
) -> GamesResponse {
    let games: Vec<Game> = games
        .into_iter()
        .filter(|game| game.tenant_id == tenant_id)
        .filter(|game| game.user_id == user_id || game.involves_user(user_id))
        .collect();
    debug!(
        "Found {} games for user {} in tenant {}",
        games.len(),
        user_id,
        tenant_id
    );
    GamesResponse::from(games)
}
