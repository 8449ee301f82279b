#![allow(dead_code)]

use scorekeeper_core::{Config, GameAssembler, GameOwner, IdSource};
use std::cell::Cell;
use std::collections::HashMap;

/// Route `tracing` output through the test harness so it shows on failure.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// Ids `{prefix}1`, `{prefix}2`, ... in call order.
pub struct SequentialIds {
    prefix: &'static str,
    next: Cell<u32>,
}

impl SequentialIds {
    pub fn new(prefix: &'static str) -> Self {
        Self {
            prefix,
            next: Cell::new(1),
        }
    }
}

impl IdSource for SequentialIds {
    fn next_id(&self) -> String {
        let n = self.next.get();
        self.next.set(n + 1);
        format!("{}{}", self.prefix, n)
    }
}

pub fn test_directory() -> HashMap<String, String> {
    HashMap::from([
        ("u1".to_string(), "Ann".to_string()),
        ("u2".to_string(), "Bo".to_string()),
        ("u3".to_string(), "Cy".to_string()),
    ])
}

pub fn test_config() -> Config {
    Config {
        min_players_per_game: 1,
        max_players_per_game: 8,
    }
}

pub fn create_test_assembler() -> GameAssembler<SequentialIds, HashMap<String, String>> {
    GameAssembler::new(test_config(), SequentialIds::new("p"), test_directory())
}

pub fn owner(user_id: &str, tenant_id: &str) -> GameOwner {
    GameOwner::new(user_id, tenant_id)
}
