//! Enemies domain: commands into and notifications out of enemies.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Command: play a transient hit reaction (correct battle keystroke).
#[derive(Debug)]
pub struct HitEnemyEvent {
    pub entity: Entity,
}

impl Message for HitEnemyEvent {}

/// Command: deal terminal damage (battle won). No-op on a dead enemy.
#[derive(Debug)]
pub struct DamageEnemyEvent {
    pub entity: Entity,
}

impl Message for DamageEnemyEvent {}

/// Notification: an enemy was defeated.
#[derive(Debug)]
pub struct EnemyDiedEvent {
    pub entity: Entity,
}

impl Message for EnemyDiedEvent {}
