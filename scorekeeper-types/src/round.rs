use crate::fields::{FromFields, Fields, impl_try_from_value};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;

/// One player's result within one round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", try_from = "Value")]
#[ts(export)]
pub struct Score {
    /// Id of a player of the same game. Checked by whoever owns the game.
    pub player_id: String,
    pub score: i32,
}

impl Score {
    pub fn new(player_id: impl Into<String>, score: i32) -> Self {
        Self {
            player_id: player_id.into(),
            score,
        }
    }
}

impl FromFields for Score {
    fn from_fields(fields: &mut Fields<'_>) -> Option<Self> {
        let player_id = fields.required("player_id");
        let score = fields.required("score");
        Some(Self {
            player_id: player_id?,
            score: score?,
        })
    }
}

/// One scoring event. Players without an entry in `scores` have no score
/// recorded for this round, which is not the same as scoring zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", try_from = "Value")]
#[ts(export)]
pub struct Round {
    pub id: String,
    pub scores: Vec<Score>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Round {
    pub fn new(id: impl Into<String>, scores: Vec<Score>) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            scores,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn score_of(&self, player_id: &str) -> Option<i32> {
        self.scores
            .iter()
            .find(|s| s.player_id == player_id)
            .map(|s| s.score)
    }

    /// Advance `updated_at` to now, never moving it backwards.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now().max(self.updated_at);
    }
}

impl FromFields for Round {
    fn from_fields(fields: &mut Fields<'_>) -> Option<Self> {
        let id = fields.required("id");
        let scores = fields.list("scores");
        let created_at = fields.defaulted("created_at", Utc::now);
        let updated_at = fields.defaulted("updated_at", Utc::now);
        Some(Self {
            id: id?,
            scores: scores?,
            created_at: created_at?,
            updated_at: updated_at?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", try_from = "Value")]
#[ts(export)]
pub struct RoundCreate {
    pub scores: Vec<Score>,
}

impl FromFields for RoundCreate {
    fn from_fields(fields: &mut Fields<'_>) -> Option<Self> {
        let scores = fields.list("scores");
        Some(Self { scores: scores? })
    }
}

/// Full replacement of a round's scores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", try_from = "Value")]
#[ts(export)]
pub struct RoundUpdate {
    pub scores: Vec<Score>,
    pub updated_at: DateTime<Utc>,
}

impl RoundUpdate {
    pub fn new(scores: Vec<Score>) -> Self {
        Self {
            scores,
            updated_at: Utc::now(),
        }
    }
}

impl FromFields for RoundUpdate {
    fn from_fields(fields: &mut Fields<'_>) -> Option<Self> {
        let scores = fields.list("scores");
        let updated_at = fields.defaulted("updated_at", Utc::now);
        Some(Self {
            scores: scores?,
            updated_at: updated_at?,
        })
    }
}

impl_try_from_value!(Score, Round, RoundCreate, RoundUpdate);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Violation;
    use serde_json::json;

    #[test]
    fn test_empty_round_is_valid() {
        let round = Round::from_value(json!({"id": "r1", "scores": []})).unwrap();
        assert!(round.scores.is_empty());
    }

    #[test]
    fn test_round_requires_scores() {
        let err = Round::from_value(json!({"id": "r1"})).unwrap_err();
        assert_eq!(err.violation_at("scores"), Some(&Violation::Missing));
    }

    #[test]
    fn test_negative_scores_allowed() {
        let score = Score::from_value(json!({"playerId": "p1", "score": -40})).unwrap();
        assert_eq!(score.score, -40);
    }

    #[test]
    fn test_nested_score_paths() {
        let err = Round::from_value(json!({
            "id": "r1",
            "scores": [{"playerId": "p1", "score": 10}, {"score": "ten"}]
        }))
        .unwrap_err();
        assert_eq!(err.paths(), vec!["scores[1].playerId", "scores[1].score"]);
    }

    #[test]
    fn test_default_timestamps_are_fresh() {
        let before = Utc::now();
        let round = Round::from_value(json!({"id": "r1", "scores": []})).unwrap();
        let after = Utc::now();
        assert!(round.created_at >= before && round.created_at <= after);
        assert!(round.updated_at >= before && round.updated_at <= after);
    }

    #[test]
    fn test_explicit_timestamps_kept() {
        let round = Round::from_value(json!({
            "id": "r1",
            "scores": [],
            "created_at": "2024-05-10T20:00:00Z",
            "updatedAt": "2024-05-10T21:00:00Z"
        }))
        .unwrap();
        assert_eq!(round.created_at.to_rfc3339(), "2024-05-10T20:00:00+00:00");
        assert!(round.updated_at > round.created_at);
    }

    #[test]
    fn test_touch_moves_forward() {
        let mut round = Round::new("r1", vec![]);
        let before = round.updated_at;
        round.touch();
        assert!(round.updated_at >= before);
        assert_eq!(round.created_at, before);
    }

    #[test]
    fn test_round_update_defaults_updated_at() {
        let before = Utc::now();
        let update = RoundUpdate::from_value(json!({"scores": [{"playerId": "p1", "score": 3}]})).unwrap();
        assert!(update.updated_at >= before);
        assert_eq!(update.scores, vec![Score::new("p1", 3)]);
    }
}
