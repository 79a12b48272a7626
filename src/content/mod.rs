//! Content domain: data definitions, RON loading, and validation.

mod data;
mod loader;
mod registry;
#[cfg(test)]
mod tests;
mod validation;

pub use data::{DataFile, EnemyDef, EnemySpawnDef, LevelDef, ZoneDef};
pub use loader::{ContentLoadError, load_all_content};
pub use registry::ContentRegistry;
pub use validation::validate_content;

use bevy::prelude::*;
use std::path::Path;

use crate::core::GameState;

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Boot), load_content_at_boot);
    }
}

fn load_content_at_boot(mut commands: Commands, mut game_state: ResMut<NextState<GameState>>) {
    let (registry, errors) = load_all_content(Path::new("assets/data"));

    for error in &errors {
        warn!("{}", error);
    }

    for problem in validate_content(&registry) {
        warn!("Content validation: {}", problem);
    }

    info!("{}", registry.summary());
    commands.insert_resource(registry);
    game_state.set(GameState::Map);
}
