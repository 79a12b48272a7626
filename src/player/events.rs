//! Player domain: commands into and notifications out of the avatar.

use bevy::ecs::message::Message;

/// Command: apply one hit to the avatar (battle countdown penalty).
#[derive(Debug)]
pub struct DamagePlayerEvent;

impl Message for DamagePlayerEvent {}

/// Command: play an attack animation (correct battle keystroke).
#[derive(Debug)]
pub struct PlayerAttackEvent;

impl Message for PlayerAttackEvent {}

/// Command: the avatar crossed an auto-jump zone while grounded.
#[derive(Debug)]
pub struct AutoJumpEvent;

impl Message for AutoJumpEvent {}

/// Notification: the avatar took damage.
#[derive(Debug)]
pub struct PlayerDamagedEvent {
    pub lives_remaining: u32,
}

impl Message for PlayerDamagedEvent {}

/// Notification: the avatar ran out of lives.
#[derive(Debug)]
pub struct PlayerDiedEvent;

impl Message for PlayerDiedEvent {}
