//! Core domain: camera setup and session flow transitions.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::core::events::ReturnToMapEvent;
use crate::core::state::GameState;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Map stand-in: any confirm key starts the configured level.
pub(crate) fn start_level_from_map(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut game_state: ResMut<NextState<GameState>>,
) {
    if keyboard.just_pressed(KeyCode::Enter) || keyboard.just_pressed(KeyCode::Space) {
        game_state.set(GameState::Playing);
    }
}

pub(crate) fn toggle_pause(
    keyboard: Res<ButtonInput<KeyCode>>,
    current: Res<State<GameState>>,
    mut game_state: ResMut<NextState<GameState>>,
) {
    if !keyboard.just_pressed(KeyCode::Escape) {
        return;
    }
    match current.get() {
        GameState::Playing => game_state.set(GameState::Paused),
        GameState::Paused => game_state.set(GameState::Playing),
        _ => {}
    }
}

/// Suspend the gameplay clock while paused so countdowns, cooldowns, and
/// score sampling all freeze together.
pub(crate) fn pause_clock(mut time: ResMut<Time<Virtual>>) {
    time.pause();
}

pub(crate) fn resume_clock(mut time: ResMut<Time<Virtual>>) {
    time.unpause();
}

pub(crate) fn handle_return_to_map(
    mut events: MessageReader<ReturnToMapEvent>,
    mut game_state: ResMut<NextState<GameState>>,
) {
    if events.read().next().is_some() {
        info!("Returning to map");
        game_state.set(GameState::Map);
    }
}

/// LevelComplete stand-in: confirm returns to the map.
pub(crate) fn leave_level_complete(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut game_state: ResMut<NextState<GameState>>,
) {
    if keyboard.just_pressed(KeyCode::Enter) || keyboard.just_pressed(KeyCode::Space) {
        game_state.set(GameState::Map);
    }
}
