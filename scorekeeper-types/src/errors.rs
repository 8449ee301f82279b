use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// What is wrong with a single field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, thiserror::Error)]
#[serde(tag = "kind", rename_all = "camelCase")]
#[ts(export)]
pub enum Violation {
    #[error("field is required")]
    Missing,
    #[error("{detail}")]
    Invalid { detail: String },
    #[error("unknown field")]
    Unknown,
    #[error("given twice, also as `{alternate}`")]
    Duplicate { alternate: String },
    #[error("field cannot be cleared")]
    NotClearable,
    #[error("value cannot be empty")]
    Empty,
    #[error("exactly one of userId or customName must be provided")]
    PlayerIdentity,
    #[error("expected an object")]
    NotAnObject,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, thiserror::Error)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
#[error("{}: {violation}", display_path(.path))]
pub struct FieldError {
    /// Externally named path, e.g. `players[1].userId`. Empty for the input itself.
    pub path: String,
    pub violation: Violation,
}

fn display_path(path: &str) -> &str {
    if path.is_empty() { "(input)" } else { path }
}

impl FieldError {
    pub fn new(path: impl Into<String>, violation: Violation) -> Self {
        Self {
            path: path.into(),
            violation,
        }
    }
}

/// Rejection of a whole construction attempt, listing every offending field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, thiserror::Error)]
#[ts(export)]
pub struct ValidationError {
    pub violations: Vec<FieldError>,
}

impl ValidationError {
    pub fn new(violations: Vec<FieldError>) -> Self {
        Self { violations }
    }

    /// Paths of every offending field, in the order they were found.
    pub fn paths(&self) -> Vec<&str> {
        self.violations.iter().map(|v| v.path.as_str()).collect()
    }

    pub fn violation_at(&self, path: &str) -> Option<&Violation> {
        self.violations
            .iter()
            .find(|v| v.path == path)
            .map(|v| &v.violation)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation failed")?;
        for (i, violation) in self.violations.iter().enumerate() {
            let sep = if i == 0 { ": " } else { "; " };
            write!(f, "{sep}{violation}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_lists_every_violation() {
        let err = ValidationError::new(vec![
            FieldError::new("name", Violation::Missing),
            FieldError::new("players[0].userId", Violation::Empty),
        ]);
        assert_eq!(
            err.to_string(),
            "validation failed: name: field is required; players[0].userId: value cannot be empty"
        );
    }

    #[test]
    fn test_root_path_display() {
        let err = FieldError::new("", Violation::NotAnObject);
        assert_eq!(err.to_string(), "(input): expected an object");
    }

    #[test]
    fn test_serializes_for_transport() {
        let err = FieldError::new(
            "targetScore",
            Violation::Invalid {
                detail: "expected an array".to_string(),
            },
        );
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["path"], "targetScore");
        assert_eq!(json["violation"]["kind"], "invalid");
        assert_eq!(json["violation"]["detail"], "expected an array");
    }
}
