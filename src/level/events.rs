//! Level domain: completion notification.

use bevy::ecs::message::Message;

use super::results::LevelResult;

/// Notification: the avatar reached the finish zone. Carries the result
/// record for the reporting boundary.
#[derive(Debug)]
pub struct LevelCompletedEvent {
    pub result: LevelResult,
}

impl Message for LevelCompletedEvent {}
