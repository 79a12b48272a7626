//! Battle domain: phase-change and attack notifications.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use super::resources::BattlePhase;

/// Notification: the battle state machine changed phase.
#[derive(Debug)]
pub struct BattlePhaseChangedEvent {
    pub phase: BattlePhase,
}

impl Message for BattlePhaseChangedEvent {}

/// Notification: the countdown expired and the enemy attacked.
#[derive(Debug)]
pub struct EnemyAttackEvent {
    pub enemy: Entity,
}

impl Message for EnemyAttackEvent {}
