//! Validation for loaded content: cross-references and authoring mistakes.

use super::registry::ContentRegistry;

/// A validation problem with context about what failed.
#[derive(Debug)]
pub struct ValidationError {
    pub source_type: &'static str,
    pub source_id: String,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} '{}': {}", self.source_type, self.source_id, self.message)
    }
}

/// Validate all loaded content. Returns a list of problems, empty when clean.
/// Problems are logged by the caller; none of them abort the session.
pub fn validate_content(registry: &ContentRegistry) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (id, level) in &registry.levels {
        if level.movement_alphabet.is_empty() {
            errors.push(ValidationError {
                source_type: "Level",
                source_id: id.clone(),
                message: "movement_alphabet is empty".to_string(),
            });
        }
        if level.battle_alphabet.is_empty() {
            errors.push(ValidationError {
                source_type: "Level",
                source_id: id.clone(),
                message: "battle_alphabet is empty".to_string(),
            });
        }
        for spawn in &level.enemy_spawns {
            if !registry.enemies.contains_key(&spawn.enemy_id) {
                errors.push(ValidationError {
                    source_type: "Level",
                    source_id: id.clone(),
                    message: format!("references missing enemy '{}'", spawn.enemy_id),
                });
            }
        }
        for (index, zone) in level.auto_jump_zones.iter().enumerate() {
            if zone.width <= 0.0 || zone.height <= 0.0 {
                errors.push(ValidationError {
                    source_type: "Level",
                    source_id: id.clone(),
                    message: format!("auto_jump_zones[{}] has non-positive size", index),
                });
            }
        }
        if level.finish_zone.width <= 0.0 || level.finish_zone.height <= 0.0 {
            errors.push(ValidationError {
                source_type: "Level",
                source_id: id.clone(),
                message: "finish_zone has non-positive size".to_string(),
            });
        }
    }

    for (id, enemy) in &registry.enemies {
        if enemy.move_speed <= 0.0 {
            errors.push(ValidationError {
                source_type: "Enemy",
                source_id: id.clone(),
                message: "move_speed must be positive".to_string(),
            });
        }
        if enemy.patrol_range <= 0.0 {
            errors.push(ValidationError {
                source_type: "Enemy",
                source_id: id.clone(),
                message: "patrol_range must be positive".to_string(),
            });
        }
    }

    errors
}
