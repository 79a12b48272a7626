//! Score domain: per-session typing performance accounting.

mod manager;
#[cfg(test)]
mod tests;

pub use manager::{ScoreContext, ScoreManager, SpeedSample};

use bevy::prelude::*;

use crate::core::{GameState, SessionSet};

pub struct ScorePlugin;

impl Plugin for ScorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ScoreManager>().add_systems(
            Update,
            tick_speed_sampling
                .in_set(SessionSet::Logic)
                .run_if(in_state(GameState::Playing)),
        );
    }
}

fn tick_speed_sampling(time: Res<Time>, mut score: ResMut<ScoreManager>) {
    score.tick(time.elapsed_secs_f64());
}
