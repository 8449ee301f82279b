#![allow(dead_code)]

use serde_json::{Map, Value, json};

pub const CREATED: &str = "2024-05-10T20:00:00Z";

/// A fully populated game in wire naming, as in the public API docs.
pub fn wire_game() -> Value {
    json!({
        "id": "g1", "name": "Friday Night", "date": "2024-05-10",
        "players": [{"id": "p1", "name": "Ann", "userId": "u1"},
                    {"id": "p2", "name": "Bo", "userId": null}],
        "rounds": [wire_round("r1", &[("p1", 120), ("p2", -20)])],
        "targetScore": 500, "isComplete": false,
        "userId": "u1", "tenantId": "t1",
        "createdAt": CREATED, "updatedAt": CREATED,
        "userIds": ["u1"]
    })
}

pub fn wire_round(id: &str, scores: &[(&str, i32)]) -> Value {
    let scores: Vec<Value> = scores
        .iter()
        .map(|(player_id, score)| json!({"playerId": player_id, "score": score}))
        .collect();
    json!({"id": id, "scores": scores, "createdAt": CREATED, "updatedAt": CREATED})
}

/// Rewrite every object key from `camelCase` to `snake_case`, recursively.
pub fn to_internal_keys(value: Value) -> Value {
    match value {
        Value::Object(entries) => Value::Object(
            entries
                .into_iter()
                .map(|(key, v)| (camel_to_snake(&key), to_internal_keys(v)))
                .collect::<Map<String, Value>>(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(to_internal_keys).collect()),
        other => other,
    }
}

fn camel_to_snake(name: &str) -> String {
    let mut out = String::new();
    for ch in name.chars() {
        if ch.is_uppercase() {
            out.push('_');
            out.extend(ch.to_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// All object keys appearing anywhere in `value`.
pub fn all_keys(value: &Value) -> Vec<String> {
    let mut keys = Vec::new();
    collect_keys(value, &mut keys);
    keys
}

fn collect_keys(value: &Value, keys: &mut Vec<String>) {
    match value {
        Value::Object(entries) => {
            for (key, v) in entries {
                keys.push(key.clone());
                collect_keys(v, keys);
            }
        }
        Value::Array(items) => items.iter().for_each(|v| collect_keys(v, keys)),
        _ => {}
    }
}
