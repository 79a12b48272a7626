//! Level domain: session wiring, geometry checks, and result reporting.

mod events;
mod results;
mod systems;
#[cfg(test)]
mod tests;

pub use events::LevelCompletedEvent;
pub use results::LevelResult;
pub use systems::{ActiveLevel, LevelGeometry};

use bevy::prelude::*;

use crate::core::{GameState, SessionSet};

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<LevelCompletedEvent>()
            .add_systems(OnEnter(GameState::Playing), systems::setup_level)
            .add_systems(OnExit(GameState::Playing), systems::cleanup_level)
            .add_systems(
                Update,
                (systems::check_zones, systems::camera_follow)
                    .in_set(SessionSet::Zones)
                    .run_if(in_state(GameState::Playing)),
            );
    }
}
