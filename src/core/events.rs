//! Core domain: session flow messages.

use bevy::ecs::message::Message;

/// Hand-off back to the overworld map after death or a finished level.
/// The map/menu layer outside this crate consumes it.
#[derive(Debug)]
pub struct ReturnToMapEvent;

impl Message for ReturnToMapEvent {}
