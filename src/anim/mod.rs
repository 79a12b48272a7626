//! Animation domain: shared state machine and playback for all avatars.

mod animation;

pub use animation::{AnimState, AnimationController, AnimationFinished, AttackVariant};

use bevy::prelude::*;

use crate::core::SessionSet;

pub struct AnimPlugin;

impl Plugin for AnimPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<AnimationFinished>().add_systems(
            Update,
            animation::update_animation_frames.in_set(SessionSet::Logic),
        );
    }
}
