//! Core domain: states, tunables, input ownership, and session flow.

mod events;
mod resources;
mod state;
mod systems;

pub use events::ReturnToMapEvent;
pub use resources::{InputOwner, SessionConfig, SessionRng, SessionTuning};
pub use state::GameState;

use bevy::prelude::*;

use crate::core::systems::{
    handle_return_to_map, leave_level_complete, pause_clock, resume_clock, setup_camera,
    start_level_from_map, toggle_pause,
};

/// Frame ordering for gameplay systems. Zone checks must observe the
/// player state produced this frame, so the sets are chained.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum SessionSet {
    /// Keyboard dispatch (movement or battle, by ownership token).
    Input,
    /// Application of commands produced by dispatch (advance, attack, damage).
    Action,
    /// Per-frame state machines: locomotion, patrol, battle, sampling.
    Logic,
    /// Geometry checks against the freshly updated player state.
    Zones,
}

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<SessionTuning>()
            .init_resource::<SessionConfig>()
            .init_resource::<SessionRng>()
            .init_resource::<InputOwner>()
            .add_message::<ReturnToMapEvent>()
            .configure_sets(
                Update,
                (
                    SessionSet::Input,
                    SessionSet::Action,
                    SessionSet::Logic,
                    SessionSet::Zones,
                )
                    .chain(),
            )
            .add_systems(Startup, setup_camera)
            .add_systems(Update, start_level_from_map.run_if(in_state(GameState::Map)))
            .add_systems(
                Update,
                leave_level_complete.run_if(in_state(GameState::LevelComplete)),
            )
            .add_systems(OnEnter(GameState::Paused), pause_clock)
            .add_systems(OnExit(GameState::Paused), resume_clock)
            .add_systems(Update, (toggle_pause, handle_return_to_map));
    }
}
