use crate::errors::Violation;
use crate::fields::{FromFields, Fields, impl_try_from_value};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;

/// A participant in one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", try_from = "Value")]
#[ts(export)]
pub struct Player {
    pub id: String,
    pub name: String,
    /// Registered account of this player; `None` for a guest.
    pub user_id: Option<String>,
}

impl Player {
    pub fn registered(
        id: impl Into<String>,
        name: impl Into<String>,
        user_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            user_id: Some(user_id.into()),
        }
    }

    pub fn guest(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            user_id: None,
        }
    }

    pub fn is_guest(&self) -> bool {
        self.user_id.is_none()
    }
}

impl FromFields for Player {
    fn from_fields(fields: &mut Fields<'_>) -> Option<Self> {
        let id = fields.required("id");
        let name = fields.required("name");
        let user_id = fields.optional_non_empty("user_id");
        Some(Self {
            id: id?,
            name: name?,
            user_id: user_id?,
        })
    }
}

/// Who to add to a new game: a registered user or a named guest, never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", try_from = "Value")]
#[ts(export)]
pub struct PlayerInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional = nullable)]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional = nullable)]
    pub custom_name: Option<String>,
}

/// A validated [`PlayerInput`], split by kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerIdentity<'a> {
    Registered { user_id: &'a str },
    Guest { name: &'a str },
}

impl PlayerInput {
    pub fn user(user_id: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
            custom_name: None,
        }
    }

    pub fn guest(name: impl Into<String>) -> Self {
        Self {
            user_id: None,
            custom_name: Some(name.into()),
        }
    }

    /// Which kind of player this input describes. `None` when both or
    /// neither identity was given, which construction never lets through
    /// but a hand-built value can carry.
    pub fn identity(&self) -> Option<PlayerIdentity<'_>> {
        match (&self.user_id, &self.custom_name) {
            (Some(user_id), None) => Some(PlayerIdentity::Registered {
                user_id: user_id.as_str(),
            }),
            (None, Some(name)) => Some(PlayerIdentity::Guest { name: name.trim() }),
            _ => None,
        }
    }
}

impl FromFields for PlayerInput {
    fn from_fields(fields: &mut Fields<'_>) -> Option<Self> {
        let user_id = fields.optional_non_empty("user_id");
        let custom_name = fields.optional_non_empty("custom_name");
        let (user_id, custom_name) = (user_id?, custom_name?);
        if user_id.is_some() == custom_name.is_some() {
            let path = fields.own_path().to_string();
            fields.reject(path, Violation::PlayerIdentity);
            return None;
        }
        Some(Self {
            user_id,
            custom_name,
        })
    }
}

impl_try_from_value!(Player, PlayerInput);
