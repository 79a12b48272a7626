//! Player domain: the avatar's movement, damage, and attack protocols.

mod components;
mod events;
mod spawn;
mod systems;
#[cfg(test)]
mod tests;

pub use components::{
    ActiveHitbox, AttackControl, AutoJumpState, Gait, GameLayer, HitboxClass, HurtState, Lives,
    Locomotion, MovementStatus, Player, PlayerDying, VerticalState, gait_for,
};
pub use events::{
    AutoJumpEvent, DamagePlayerEvent, PlayerAttackEvent, PlayerDamagedEvent, PlayerDiedEvent,
};
pub(crate) use spawn::spawn_player;

use bevy::prelude::*;

use crate::core::{GameState, SessionSet};

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<DamagePlayerEvent>()
            .add_message::<PlayerAttackEvent>()
            .add_message::<AutoJumpEvent>()
            .add_message::<PlayerDamagedEvent>()
            .add_message::<PlayerDiedEvent>()
            .add_systems(
                Update,
                (
                    systems::apply_advance,
                    systems::handle_auto_jump,
                    systems::handle_player_damage,
                    systems::handle_player_attack,
                )
                    .in_set(SessionSet::Action)
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(
                Update,
                (
                    (
                        systems::detect_ground,
                        systems::update_locomotion,
                        systems::update_hitbox,
                    )
                        .chain(),
                    systems::clear_finished_attack,
                    systems::tick_player_timers,
                    systems::apply_hurt_tint,
                )
                    .in_set(SessionSet::Logic)
                    .run_if(in_state(GameState::Playing)),
            );
    }
}
