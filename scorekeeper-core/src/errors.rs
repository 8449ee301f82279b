use scorekeeper_types::ValidationError;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Game needs at least {min} players, got {count}")]
    TooFewPlayers { min: usize, count: usize },
    #[error("Game allows at most {max} players, got {count}")]
    TooManyPlayers { max: usize, count: usize },
    #[error("players[{index}] must name either a user or a guest")]
    InvalidPlayerInput { index: usize },
    #[error("Unknown user {user_id}")]
    UnknownUser { user_id: String },
    #[error("Player {player_id} is not in this game")]
    UnknownPlayer { player_id: String },
    #[error("Player {player_id} has more than one score in the round")]
    DuplicateScore { player_id: String },
    #[error("Game belongs to another tenant")]
    TenantMismatch,
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

pub type Result<T> = std::result::Result<T, CoreError>;
