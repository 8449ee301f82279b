use crate::errors::ValidationError;
use crate::fields::{FromFields, Fields, construct, impl_try_from_value};
use crate::naming::to_camel;
use crate::player::{Player, PlayerInput};
use crate::round::Round;
use chrono::{DateTime, Utc};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;

/// Target score of a new game when the request leaves it out.
pub const DEFAULT_TARGET_SCORE: i32 = 500;

/// Aggregate root: a game with its players and, when loaded, its rounds.
///
/// Serializes with an extra `userIds` key computed from `players`; that key
/// is ignored when a game is read back.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, TS)]
#[serde(try_from = "Value")]
#[ts(as = "GameWire")]
pub struct Game {
    /// Assigned by the store on first save.
    pub id: Option<String>,
    pub name: String,
    /// Calendar date as entered, not parsed.
    pub date: String,
    pub players: Vec<Player>,
    /// Kept outside the game document; empty unless loaded separately.
    pub rounds: Vec<Round>,
    pub target_score: i32,
    pub is_complete: bool,
    /// Account that created the game.
    pub user_id: String,
    pub tenant_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Game {
    /// Registered account ids of the players, in player order.
    pub fn user_ids(&self) -> Vec<&str> {
        self.players
            .iter()
            .filter_map(|p| p.user_id.as_deref())
            .collect()
    }

    pub fn involves_user(&self, user_id: &str) -> bool {
        self.players
            .iter()
            .any(|p| p.user_id.as_deref() == Some(user_id))
    }

    pub fn player(&self, player_id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now().max(self.updated_at);
    }

    pub fn with_rounds(mut self, rounds: Vec<Round>) -> Self {
        self.rounds = rounds;
        self
    }

    /// Stored form of the game: the wire object without `id` (the document
    /// key) and `rounds` (a child collection). `userIds` is kept as the index
    /// for "games involving user" queries.
    pub fn to_document(&self) -> serde_json::Result<Value> {
        let mut document = serde_json::to_value(self)?;
        if let Value::Object(entries) = &mut document {
            entries.remove(&to_camel("id"));
            entries.remove(&to_camel("rounds"));
        }
        Ok(document)
    }

    /// Read a stored game back under the id it was stored with.
    pub fn from_document(id: impl Into<String>, document: Value) -> Result<Self, ValidationError> {
        let mut game: Game = construct(document)?;
        game.id = Some(id.into());
        Ok(game)
    }
}

/// Wire form of a [`Game`]: every stored field plus the derived `userIds`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, rename = "Game")]
pub struct GameWire {
    pub id: Option<String>,
    pub name: String,
    pub date: String,
    pub players: Vec<Player>,
    pub rounds: Vec<Round>,
    pub target_score: i32,
    pub is_complete: bool,
    pub user_id: String,
    pub tenant_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub user_ids: Vec<String>,
}

impl From<&Game> for GameWire {
    fn from(game: &Game) -> Self {
        Self {
            id: game.id.clone(),
            name: game.name.clone(),
            date: game.date.clone(),
            players: game.players.clone(),
            rounds: game.rounds.clone(),
            target_score: game.target_score,
            is_complete: game.is_complete,
            user_id: game.user_id.clone(),
            tenant_id: game.tenant_id.clone(),
            created_at: game.created_at,
            updated_at: game.updated_at,
            user_ids: game.user_ids().into_iter().map(str::to_string).collect(),
        }
    }
}

impl Serialize for Game {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        GameWire::from(self).serialize(serializer)
    }
}

impl FromFields for Game {
    fn from_fields(fields: &mut Fields<'_>) -> Option<Self> {
        let id = fields.optional_non_empty("id");
        let name = fields.required("name");
        let date = fields.required("date");
        let players = fields.list("players");
        let rounds = fields.list_or_empty("rounds");
        let target_score = fields.required("target_score");
        let is_complete = fields.defaulted("is_complete", || false);
        let user_id = fields.required("user_id");
        let tenant_id = fields.required("tenant_id");
        let created_at = fields.defaulted("created_at", Utc::now);
        let updated_at = fields.defaulted("updated_at", Utc::now);
        // Derived from players on every read.
        fields.ignore("user_ids");

        Some(Self {
            id: id?,
            name: name?,
            date: date?,
            players: players?,
            rounds: rounds?,
            target_score: target_score?,
            is_complete: is_complete?,
            user_id: user_id?,
            tenant_id: tenant_id?,
            created_at: created_at?,
            updated_at: updated_at?,
        })
    }
}

/// Request to start a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", try_from = "Value")]
#[ts(export)]
pub struct GameCreate {
    pub name: String,
    pub players: Vec<PlayerInput>,
    pub target_score: i32,
}

impl GameCreate {
    pub fn new(name: impl Into<String>, players: Vec<PlayerInput>) -> Self {
        Self {
            name: name.into(),
            players,
            target_score: DEFAULT_TARGET_SCORE,
        }
    }
}

impl FromFields for GameCreate {
    fn from_fields(fields: &mut Fields<'_>) -> Option<Self> {
        let name = fields.required("name");
        let players = fields.list("players");
        let target_score = fields.defaulted("target_score", || DEFAULT_TARGET_SCORE);
        Some(Self {
            name: name?,
            players: players?,
            target_score: target_score?,
        })
    }
}

/// Partial change to a game. `None` means "leave as is"; none of these
/// fields can be cleared, so `null` on the wire is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", try_from = "Value")]
#[ts(export)]
pub struct GameUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub target_score: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub is_complete: Option<bool>,
    pub updated_at: DateTime<Utc>,
}

impl GameUpdate {
    pub fn new() -> Self {
        Self {
            name: None,
            date: None,
            target_score: None,
            is_complete: None,
            updated_at: Utc::now(),
        }
    }

    /// True when applying this update would only bump `updated_at`.
    pub fn changes_nothing(&self) -> bool {
        self.name.is_none()
            && self.date.is_none()
            && self.target_score.is_none()
            && self.is_complete.is_none()
    }
}

impl Default for GameUpdate {
    fn default() -> Self {
        Self::new()
    }
}

impl FromFields for GameUpdate {
    fn from_fields(fields: &mut Fields<'_>) -> Option<Self> {
        let name = fields.unchanged_or("name");
        let date = fields.unchanged_or("date");
        let target_score = fields.unchanged_or("target_score");
        let is_complete = fields.unchanged_or("is_complete");
        let updated_at = fields.defaulted("updated_at", Utc::now);
        Some(Self {
            name: name?,
            date: date?,
            target_score: target_score?,
            is_complete: is_complete?,
            updated_at: updated_at?,
        })
    }
}

impl_try_from_value!(Game, GameCreate, GameUpdate);
