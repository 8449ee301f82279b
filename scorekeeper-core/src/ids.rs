use std::collections::HashMap;
use uuid::Uuid;

/// Hands out fresh ids for players and rounds.
pub trait IdSource {
    fn next_id(&self) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdSource for UuidIds {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Looks up display names of registered users.
pub trait UserDirectory {
    fn display_name(&self, user_id: &str) -> Option<String>;
}

impl UserDirectory for HashMap<String, String> {
    fn display_name(&self, user_id: &str) -> Option<String> {
        self.get(user_id).cloned()
    }
}
