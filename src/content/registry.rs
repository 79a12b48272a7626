//! ContentRegistry resource providing id lookups for loaded definitions.

use bevy::prelude::*;
use std::collections::HashMap;

use super::data::{EnemyDef, LevelDef};

/// Central registry for all loaded session content.
#[derive(Resource, Default)]
pub struct ContentRegistry {
    pub levels: HashMap<String, LevelDef>,
    pub enemies: HashMap<String, EnemyDef>,
}

impl ContentRegistry {
    /// Returns a summary of loaded content counts for logging.
    pub fn summary(&self) -> String {
        format!(
            "ContentRegistry loaded: {} levels, {} enemies",
            self.levels.len(),
            self.enemies.len()
        )
    }

    pub fn level_or_fallback(&self, id: &str) -> LevelDef {
        match self.levels.get(id) {
            Some(level) => level.clone(),
            None => {
                warn!("Level '{}' not found, using fallback level", id);
                LevelDef::fallback()
            }
        }
    }
}
