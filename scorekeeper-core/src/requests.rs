use crate::errors::Result;
use scorekeeper_types::FromFields;
use serde_json::Value;
use tracing::warn;

/// Build a request payload, logging a rejection before handing it back.
pub fn parse_request<T: FromFields>(payload: Value) -> Result<T> {
    T::from_value(payload).map_err(|e| {
        warn!(violations = e.violations.len(), "Rejected request: {}", e);
        e.into()
    })
}
