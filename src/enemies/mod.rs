//! Enemies domain: patrol state machines, spawning, and cleanup.

mod components;
mod events;
mod spawn;
mod systems;

pub use components::{Enemy, EnemyDying, HitReacting, Patrol, PatrolPhase};
pub use events::{DamageEnemyEvent, EnemyDiedEvent, HitEnemyEvent};
pub(crate) use spawn::spawn_enemies;

use bevy::prelude::*;

use crate::core::{GameState, SessionSet};

pub struct EnemiesPlugin;

impl Plugin for EnemiesPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<HitEnemyEvent>()
            .add_message::<DamageEnemyEvent>()
            .add_message::<EnemyDiedEvent>()
            .add_systems(
                Update,
                (systems::handle_hit_enemy, systems::handle_damage_enemy)
                    .in_set(SessionSet::Action)
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(
                Update,
                (
                    systems::update_patrol,
                    systems::tick_hit_reaction,
                    systems::tick_dying,
                )
                    .in_set(SessionSet::Logic)
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(OnExit(GameState::Playing), spawn::cleanup_enemies);
    }
}
