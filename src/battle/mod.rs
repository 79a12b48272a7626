//! Battle domain: the proximity-triggered timed typing duel.

mod events;
mod resources;
mod systems;

pub use events::{BattlePhaseChangedEvent, EnemyAttackEvent};
pub use resources::{BattlePhase, BattleState};

use bevy::prelude::*;

use crate::core::{GameState, SessionSet};

pub struct BattlePlugin;

impl Plugin for BattlePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BattleState>()
            .add_message::<BattlePhaseChangedEvent>()
            .add_message::<EnemyAttackEvent>()
            .add_systems(
                Update,
                systems::process_battle_keystrokes.in_set(SessionSet::Input),
            )
            .add_systems(
                Update,
                (
                    systems::check_battle_start,
                    systems::tick_announcing,
                    systems::tick_countdown,
                    systems::resolve_battle,
                )
                    .chain()
                    .in_set(SessionSet::Logic)
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(OnExit(GameState::Playing), systems::cleanup_battle);
    }
}
