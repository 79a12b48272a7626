//! Typing domain: messages crossing the dispatch boundary.

use bevy::ecs::message::Message;

use super::sequence::SequenceKind;

/// A sequence or its cursor changed; the rendering layer re-reads the
/// owning resource to refresh its display.
#[derive(Debug)]
pub struct SequenceChangedEvent {
    pub kind: SequenceKind,
}

impl Message for SequenceChangedEvent {}

/// A correct movement keystroke authorized the avatar to travel further.
#[derive(Debug)]
pub struct AdvanceEvent {
    pub distance: f32,
}

impl Message for AdvanceEvent {}
