//! Field-by-field construction of model types from keyed JSON objects.
//!
//! Every model type reads its fields by internal name; the reader accepts a
//! key under either the internal name or its external (`camelCase`) form and
//! keeps collecting violations instead of stopping at the first one.

use crate::errors::{FieldError, ValidationError, Violation};
use crate::naming::{join_path, to_camel};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

pub trait FromFields: Sized {
    /// Read all fields of `Self`. Returns `None` if any violation was recorded
    /// while reading them.
    fn from_fields(fields: &mut Fields<'_>) -> Option<Self>;

    /// Build from an object using internal or external key names.
    fn from_value(value: Value) -> Result<Self, ValidationError> {
        construct(value)
    }

    fn from_json(json: &str) -> Result<Self, ValidationError> {
        match serde_json::from_str::<Value>(json) {
            Ok(value) => construct(value),
            Err(e) => Err(ValidationError::new(vec![FieldError::new(
                "",
                Violation::Invalid {
                    detail: e.to_string(),
                },
            )])),
        }
    }
}

/// Build a `T`, or fail with every violation found anywhere in `value`.
pub fn construct<T: FromFields>(value: Value) -> Result<T, ValidationError> {
    let mut violations = Vec::new();
    let built = read_object::<T>(value, String::new(), &mut violations);
    match built {
        Some(built) if violations.is_empty() => Ok(built),
        _ => Err(ValidationError::new(violations)),
    }
}

fn read_object<T: FromFields>(
    value: Value,
    path: String,
    violations: &mut Vec<FieldError>,
) -> Option<T> {
    let Value::Object(entries) = value else {
        violations.push(FieldError::new(path, Violation::NotAnObject));
        return None;
    };
    let mut fields = Fields {
        prefix: path,
        entries,
        violations,
    };
    let built = T::from_fields(&mut fields);
    fields.finish();
    built
}

/// `TryFrom<serde_json::Value>` through [`construct`], which the serde
/// `try_from` attribute on each model type relies on.
macro_rules! impl_try_from_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl TryFrom<serde_json::Value> for $ty {
                type Error = $crate::errors::ValidationError;

                fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
                    $crate::fields::construct(value)
                }
            }
        )*
    };
}

pub(crate) use impl_try_from_value;

enum Slot {
    Absent,
    Present(Value),
    Conflict,
}

/// Unread entries of one object plus the shared violation list.
pub struct Fields<'e> {
    prefix: String,
    entries: Map<String, Value>,
    violations: &'e mut Vec<FieldError>,
}

impl Fields<'_> {
    /// External path of a field of this object.
    pub fn path(&self, name: &str) -> String {
        join_path(&self.prefix, &to_camel(name))
    }

    /// Path of this object itself.
    pub fn own_path(&self) -> &str {
        &self.prefix
    }

    pub fn reject(&mut self, path: impl Into<String>, violation: Violation) {
        self.violations.push(FieldError::new(path, violation));
    }

    fn take(&mut self, name: &str) -> Slot {
        let external = to_camel(name);
        let by_external = self.entries.remove(&external);
        let by_internal = if external == name {
            None
        } else {
            self.entries.remove(name)
        };
        match (by_external, by_internal) {
            (Some(_), Some(_)) => {
                let path = self.path(name);
                self.reject(
                    path,
                    Violation::Duplicate {
                        alternate: name.to_string(),
                    },
                );
                Slot::Conflict
            }
            (Some(value), None) | (None, Some(value)) => Slot::Present(value),
            (None, None) => Slot::Absent,
        }
    }

    fn parse<T: DeserializeOwned>(&mut self, name: &str, value: Value) -> Option<T> {
        match serde_json::from_value(value) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                let path = self.path(name);
                self.reject(
                    path,
                    Violation::Invalid {
                        detail: e.to_string(),
                    },
                );
                None
            }
        }
    }

    pub fn required<T: DeserializeOwned>(&mut self, name: &str) -> Option<T> {
        match self.take(name) {
            Slot::Present(value) => self.parse(name, value),
            Slot::Absent => {
                let path = self.path(name);
                self.reject(path, Violation::Missing);
                None
            }
            Slot::Conflict => None,
        }
    }

    /// Absent and `null` both read as `None`.
    pub fn optional<T: DeserializeOwned>(&mut self, name: &str) -> Option<Option<T>> {
        match self.take(name) {
            Slot::Absent | Slot::Present(Value::Null) => Some(None),
            Slot::Present(value) => self.parse(name, value).map(Some),
            Slot::Conflict => None,
        }
    }

    /// Like [`Fields::optional`], but a present value must not be blank.
    pub fn optional_non_empty(&mut self, name: &str) -> Option<Option<String>> {
        let value = self.optional::<String>(name)?;
        match value {
            Some(text) if text.trim().is_empty() => {
                let path = self.path(name);
                self.reject(path, Violation::Empty);
                None
            }
            other => Some(other),
        }
    }

    /// Absent reads as `default()`, evaluated once per call.
    pub fn defaulted<T: DeserializeOwned>(
        &mut self,
        name: &str,
        default: impl FnOnce() -> T,
    ) -> Option<T> {
        match self.take(name) {
            Slot::Present(value) => self.parse(name, value),
            Slot::Absent => Some(default()),
            Slot::Conflict => None,
        }
    }

    /// Update-shape field: absent means "no change", `null` is rejected
    /// because the target field cannot be cleared.
    pub fn unchanged_or<T: DeserializeOwned>(&mut self, name: &str) -> Option<Option<T>> {
        match self.take(name) {
            Slot::Absent => Some(None),
            Slot::Present(Value::Null) => {
                let path = self.path(name);
                self.reject(path, Violation::NotClearable);
                None
            }
            Slot::Present(value) => self.parse(name, value).map(Some),
            Slot::Conflict => None,
        }
    }

    pub fn list<T: FromFields>(&mut self, name: &str) -> Option<Vec<T>> {
        match self.take(name) {
            Slot::Present(value) => self.parse_list(name, value),
            Slot::Absent => {
                let path = self.path(name);
                self.reject(path, Violation::Missing);
                None
            }
            Slot::Conflict => None,
        }
    }

    pub fn list_or_empty<T: FromFields>(&mut self, name: &str) -> Option<Vec<T>> {
        match self.take(name) {
            Slot::Present(value) => self.parse_list(name, value),
            Slot::Absent => Some(Vec::new()),
            Slot::Conflict => None,
        }
    }

    fn parse_list<T: FromFields>(&mut self, name: &str, value: Value) -> Option<Vec<T>> {
        let path = self.path(name);
        let Value::Array(items) = value else {
            self.reject(
                path,
                Violation::Invalid {
                    detail: "expected an array".to_string(),
                },
            );
            return None;
        };

        let mut parsed = Vec::with_capacity(items.len());
        let mut complete = true;
        for (i, item) in items.into_iter().enumerate() {
            match read_object::<T>(item, format!("{path}[{i}]"), self.violations) {
                Some(entry) => parsed.push(entry),
                None => complete = false,
            }
        }
        complete.then_some(parsed)
    }

    /// Drop a key without reading it, under either spelling.
    pub fn ignore(&mut self, name: &str) {
        self.entries.remove(&to_camel(name));
        self.entries.remove(name);
    }

    fn finish(self) {
        for key in self.entries.keys() {
            self.violations
                .push(FieldError::new(join_path(&self.prefix, key), Violation::Unknown));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, PartialEq)]
    struct Sample {
        target_score: i32,
        user_id: Option<String>,
    }

    impl FromFields for Sample {
        fn from_fields(fields: &mut Fields<'_>) -> Option<Self> {
            let target_score = fields.required("target_score");
            let user_id = fields.optional_non_empty("user_id");
            Some(Self {
                target_score: target_score?,
                user_id: user_id?,
            })
        }
    }

    #[test]
    fn test_accepts_either_spelling() {
        let internal: Sample = construct(json!({"target_score": 5, "user_id": "u1"})).unwrap();
        let external: Sample = construct(json!({"targetScore": 5, "userId": "u1"})).unwrap();
        assert_eq!(internal, external);
    }

    #[test]
    fn test_both_spellings_conflict() {
        let err = construct::<Sample>(json!({"target_score": 5, "targetScore": 6})).unwrap_err();
        assert_eq!(
            err.violation_at("targetScore"),
            Some(&Violation::Duplicate {
                alternate: "target_score".to_string()
            })
        );
    }

    #[test]
    fn test_collects_all_violations() {
        let err = construct::<Sample>(json!({"userId": "  ", "extra": true})).unwrap_err();
        assert_eq!(err.paths(), vec!["targetScore", "userId", "extra"]);
        assert_eq!(err.violation_at("targetScore"), Some(&Violation::Missing));
        assert_eq!(err.violation_at("userId"), Some(&Violation::Empty));
        assert_eq!(err.violation_at("extra"), Some(&Violation::Unknown));
    }

    #[test]
    fn test_wrong_type_is_reported() {
        let err = construct::<Sample>(json!({"targetScore": "high"})).unwrap_err();
        assert!(matches!(
            err.violation_at("targetScore"),
            Some(Violation::Invalid { .. })
        ));
    }

    #[test]
    fn test_non_object_input() {
        let err = construct::<Sample>(json!([1, 2])).unwrap_err();
        assert_eq!(err.violation_at(""), Some(&Violation::NotAnObject));
    }

    #[test]
    fn test_from_json_reports_malformed_text() {
        let err = Sample::from_json("{not json").unwrap_err();
        assert!(matches!(err.violation_at(""), Some(Violation::Invalid { .. })));
    }
}
