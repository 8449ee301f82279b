use std::env;
use std::fmt::Display;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub min_players_per_game: usize,
    pub max_players_per_game: usize,
}

impl Config {
    pub fn new() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key/value source; `new` reads the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let min_players_per_game = parse_or("MIN_PLAYERS_PER_GAME", lookup("MIN_PLAYERS_PER_GAME"), 1);
        let mut max_players_per_game =
            parse_or("MAX_PLAYERS_PER_GAME", lookup("MAX_PLAYERS_PER_GAME"), 16);
        if max_players_per_game < min_players_per_game {
            tracing::warn!(
                "MAX_PLAYERS_PER_GAME ({}) is below MIN_PLAYERS_PER_GAME ({}), using {}",
                max_players_per_game,
                min_players_per_game,
                min_players_per_game
            );
            max_players_per_game = min_players_per_game;
        }
        Self {
            min_players_per_game,
            max_players_per_game,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_or<T: FromStr + Display>(key: &str, raw: Option<String>, default: T) -> T {
    match raw {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid {}={:?}, using default {}", key, raw, default);
            default
        }),
        None => default,
    }
}
