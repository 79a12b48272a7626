//! Content domain: tests for data parsing, zones, and validation.

use bevy::prelude::Vec2;

use super::data::{DataFile, EnemyDef, LevelDef, ZoneDef};
use super::registry::ContentRegistry;
use super::validation::validate_content;

fn zone() -> ZoneDef {
    ZoneDef {
        x: 100.0,
        y: 0.0,
        width: 50.0,
        height: 80.0,
    }
}

#[test]
fn test_zone_contains_inside_and_edges() {
    let zone = zone();
    assert!(zone.contains(Vec2::new(120.0, 40.0)));
    assert!(zone.contains(Vec2::new(100.0, 0.0)));
    assert!(zone.contains(Vec2::new(150.0, 80.0)));
}

#[test]
fn test_zone_excludes_outside() {
    let zone = zone();
    assert!(!zone.contains(Vec2::new(99.9, 40.0)));
    assert!(!zone.contains(Vec2::new(150.1, 40.0)));
    assert!(!zone.contains(Vec2::new(120.0, -0.1)));
    assert!(!zone.contains(Vec2::new(120.0, 80.1)));
}

#[test]
fn test_fallback_level_is_usable() {
    let level = LevelDef::fallback();
    assert!(!level.movement_chars().is_empty());
    assert!(!level.battle_chars().is_empty());
    assert!(level.player_spawn.is_some());
    assert!(level.finish_zone.width > 0.0);
}

#[test]
fn test_enemy_def_parses_from_ron() {
    let source = r#"
        (
            items: [
                (
                    id: "enemy_test",
                    name: "Test",
                    move_speed: 50.0,
                    patrol_range: 80.0,
                    patrol_pause: 1.0,
                    size: (30.0, 30.0),
                    color: (1.0, 0.0, 0.0),
                ),
            ],
        )
    "#;
    let parsed: DataFile<EnemyDef> = ron::from_str(source).expect("valid RON");
    assert_eq!(parsed.items.len(), 1);
    assert_eq!(parsed.items[0].id, "enemy_test");
    assert_eq!(parsed.items[0].size, (30.0, 30.0));
}

#[test]
fn test_level_def_parses_from_ron() {
    let source = r#"
        (
            items: [
                (
                    id: "level_test",
                    name: "Test",
                    movement_alphabet: "abc",
                    battle_alphabet: "ab",
                    player_spawn: Some((10.0, 20.0)),
                    ground_y: 0.0,
                    length: 1000.0,
                    enemy_spawns: [
                        (enemy_id: "enemy_test", x: 500.0, y: 16.0),
                    ],
                    auto_jump_zones: [
                        (x: 300.0, y: 0.0, width: 100.0, height: 60.0),
                    ],
                    finish_zone: (x: 900.0, y: 0.0, width: 100.0, height: 200.0),
                ),
            ],
        )
    "#;
    let parsed: DataFile<LevelDef> = ron::from_str(source).expect("valid RON");
    let level = &parsed.items[0];
    assert_eq!(level.player_spawn, Some((10.0, 20.0)));
    assert_eq!(level.enemy_spawns.len(), 1);
    assert_eq!(level.movement_chars(), vec!['a', 'b', 'c']);
}

// -----------------------------------------------------------------------------
// Validation tests
// -----------------------------------------------------------------------------

fn registry_with(level: LevelDef, enemies: Vec<EnemyDef>) -> ContentRegistry {
    let mut registry = ContentRegistry::default();
    registry.levels.insert(level.id.clone(), level);
    for enemy in enemies {
        registry.enemies.insert(enemy.id.clone(), enemy);
    }
    registry
}

#[test]
fn test_validation_passes_for_consistent_content() {
    let mut level = LevelDef::fallback();
    level.enemy_spawns.push(super::data::EnemySpawnDef {
        enemy_id: "enemy_test".to_string(),
        x: 100.0,
        y: 16.0,
    });
    let enemy = EnemyDef {
        id: "enemy_test".to_string(),
        name: "Test".to_string(),
        move_speed: 50.0,
        patrol_range: 80.0,
        patrol_pause: 1.0,
        size: (30.0, 30.0),
        color: (1.0, 0.0, 0.0),
    };
    let registry = registry_with(level, vec![enemy]);
    assert!(validate_content(&registry).is_empty());
}

#[test]
fn test_validation_flags_missing_enemy_reference() {
    let mut level = LevelDef::fallback();
    level.enemy_spawns.push(super::data::EnemySpawnDef {
        enemy_id: "enemy_ghost".to_string(),
        x: 100.0,
        y: 16.0,
    });
    let registry = registry_with(level, Vec::new());
    let errors = validate_content(&registry);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.contains("enemy_ghost"));
}

#[test]
fn test_validation_flags_empty_alphabet_and_bad_zone() {
    let mut level = LevelDef::fallback();
    level.movement_alphabet.clear();
    level.finish_zone.width = 0.0;
    let registry = registry_with(level, Vec::new());
    let errors = validate_content(&registry);
    assert_eq!(errors.len(), 2);
}
