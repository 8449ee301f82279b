use crate::config::Config;
use crate::errors::{CoreError, Result};
use crate::ids::{IdSource, UserDirectory};
use chrono::Utc;
use scorekeeper_types::{Game, GameCreate, Player, PlayerIdentity, PlayerInput};
use tracing::{debug, info};

/// Account and tenant a new game is created under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOwner {
    pub user_id: String,
    pub tenant_id: String,
}

impl GameOwner {
    pub fn new(user_id: impl Into<String>, tenant_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            tenant_id: tenant_id.into(),
        }
    }
}

/// Today's UTC date in the `YYYY-MM-DD` form games are labelled with.
pub fn today() -> String {
    Utc::now().date_naive().to_string()
}

/// Turns a `GameCreate` request into an unsaved `Game`.
pub struct GameAssembler<I, D> {
    config: Config,
    ids: I,
    directory: D,
}

impl<I: IdSource, D: UserDirectory> GameAssembler<I, D> {
    pub fn new(config: Config, ids: I, directory: D) -> Self {
        Self {
            config,
            ids,
            directory,
        }
    }

    pub fn assemble(
        &self,
        create: GameCreate,
        owner: &GameOwner,
        date: impl Into<String>,
    ) -> Result<Game> {
        let count = create.players.len();
        if count < self.config.min_players_per_game {
            return Err(CoreError::TooFewPlayers {
                min: self.config.min_players_per_game,
                count,
            });
        }
        if count > self.config.max_players_per_game {
            return Err(CoreError::TooManyPlayers {
                max: self.config.max_players_per_game,
                count,
            });
        }

        let players = create
            .players
            .iter()
            .enumerate()
            .map(|(index, input)| self.resolve_player(index, input))
            .collect::<Result<Vec<_>>>()?;

        let now = Utc::now();
        let game = Game {
            id: None,
            name: create.name,
            date: date.into(),
            players,
            rounds: Vec::new(),
            target_score: create.target_score,
            is_complete: false,
            user_id: owner.user_id.clone(),
            tenant_id: owner.tenant_id.clone(),
            created_at: now,
            updated_at: now,
        };

        info!(
            tenant_id = %game.tenant_id,
            players = game.players.len(),
            registered = game.user_ids().len(),
            "Assembled game '{}'",
            game.name
        );
        Ok(game)
    }

    fn resolve_player(&self, index: usize, input: &PlayerInput) -> Result<Player> {
        match input.identity() {
            Some(PlayerIdentity::Registered { user_id }) => {
                let name = self.directory.display_name(user_id).ok_or_else(|| {
                    CoreError::UnknownUser {
                        user_id: user_id.to_string(),
                    }
                })?;
                debug!("players[{}] resolved to registered user {}", index, user_id);
                Ok(Player::registered(self.ids.next_id(), name, user_id))
            }
            Some(PlayerIdentity::Guest { name }) => {
                debug!("players[{}] is guest '{}'", index, name);
                Ok(Player::guest(self.ids.next_id(), name))
            }
            None => Err(CoreError::InvalidPlayerInput { index }),
        }
    }
}
