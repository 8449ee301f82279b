use crate::fields::{FromFields, Fields, impl_try_from_value};
use crate::game::Game;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;

/// List of games as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", try_from = "Value")]
#[ts(export)]
pub struct GamesResponse {
    pub games: Vec<Game>,
}

impl FromFields for GamesResponse {
    fn from_fields(fields: &mut Fields<'_>) -> Option<Self> {
        let games = fields.list("games");
        Some(Self { games: games? })
    }
}

impl_try_from_value!(GamesResponse);

impl From<Vec<Game>> for GamesResponse {
    fn from(games: Vec<Game>) -> Self {
        Self { games }
    }
}
