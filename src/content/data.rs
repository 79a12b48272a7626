//! Content domain: serde definitions for level and enemy data files.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Wrapper for RON files containing a list of definitions.
#[derive(Debug, Deserialize, Serialize)]
pub struct DataFile<T> {
    pub items: Vec<T>,
}

/// Axis-aligned rectangle authored in level data, min-corner + size.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct ZoneDef {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl ZoneDef {
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }
}

/// One authored enemy placement.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EnemySpawnDef {
    pub enemy_id: String,
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LevelDef {
    pub id: String,
    pub name: String,
    /// Characters the movement sequence draws from.
    pub movement_alphabet: String,
    /// Characters battle sequences draw from.
    pub battle_alphabet: String,
    /// Avatar start position; absent spawn data degrades to a default.
    pub player_spawn: Option<(f32, f32)>,
    /// Top surface of the walkable ground.
    pub ground_y: f32,
    /// Horizontal extent of the level geometry.
    pub length: f32,
    pub enemy_spawns: Vec<EnemySpawnDef>,
    pub auto_jump_zones: Vec<ZoneDef>,
    pub finish_zone: ZoneDef,
}

impl LevelDef {
    /// Built-in level used when no level data loads at all. The session
    /// degrades rather than aborting.
    pub fn fallback() -> Self {
        Self {
            id: "level_fallback".to_string(),
            name: "Fallback".to_string(),
            movement_alphabet: "abcdefghijklmnopqrstuvwxyz".to_string(),
            battle_alphabet: "asdfjkl".to_string(),
            player_spawn: Some((0.0, 40.0)),
            ground_y: 0.0,
            length: 4000.0,
            enemy_spawns: Vec::new(),
            auto_jump_zones: Vec::new(),
            finish_zone: ZoneDef {
                x: 3800.0,
                y: 0.0,
                width: 200.0,
                height: 200.0,
            },
        }
    }

    pub fn movement_chars(&self) -> Vec<char> {
        self.movement_alphabet.chars().collect()
    }

    pub fn battle_chars(&self) -> Vec<char> {
        self.battle_alphabet.chars().collect()
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EnemyDef {
    pub id: String,
    pub name: String,
    pub move_speed: f32,
    /// Half-width of the patrol path around the spawn point.
    pub patrol_range: f32,
    /// Idle pause at each patrol end before reversing.
    pub patrol_pause: f32,
    pub size: (f32, f32),
    pub color: (f32, f32, f32),
}
