//! Core domain: game state definitions for the session flow.

use bevy::prelude::*;

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum GameState {
    #[default]
    Boot,
    /// Overworld map stand-in. Level/profile screens live outside this crate;
    /// this state only hosts the hand-off back from a finished or failed run.
    Map,
    Playing,
    Paused,
    LevelComplete,
}
