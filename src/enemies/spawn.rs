//! Enemies domain: instantiation from level data and forced cleanup.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::anim::{AnimState, AnimationController};
use crate::content::{ContentRegistry, LevelDef};
use crate::enemies::components::{Enemy, Patrol};
use crate::player::GameLayer;

/// Instantiate every authored spawn point. Unknown enemy ids are logged
/// and skipped; the session stays playable.
pub(crate) fn spawn_enemies(
    commands: &mut Commands,
    registry: &ContentRegistry,
    level: &LevelDef,
) -> usize {
    let mut spawned = 0;

    for spawn in &level.enemy_spawns {
        let Some(def) = registry.enemies.get(&spawn.enemy_id) else {
            warn!(
                "Unknown enemy '{}' in level '{}', skipping spawn",
                spawn.enemy_id, level.id
            );
            continue;
        };

        let size = Vec2::new(def.size.0, def.size.1);
        let mut anim = AnimationController::default();
        anim.set_state(AnimState::Walk);

        commands.spawn((
            Enemy {
                def_id: def.id.clone(),
            },
            Patrol::new(spawn.x, def),
            anim,
            Sprite {
                color: Color::srgb(def.color.0, def.color.1, def.color.2),
                custom_size: Some(size),
                ..default()
            },
            Transform::from_xyz(spawn.x, spawn.y, 5.0),
            RigidBody::Kinematic,
            Collider::rectangle(size.x, size.y),
            LinearVelocity::default(),
            CollisionLayers::new(GameLayer::Enemy, [GameLayer::Ground]),
        ));
        spawned += 1;
    }

    spawned
}

/// Forcibly destroy all enemies regardless of their state.
pub(crate) fn cleanup_enemies(mut commands: Commands, query: Query<Entity, With<Enemy>>) {
    for entity in &query {
        commands.entity(entity).despawn();
    }
}
