//! Player domain: avatar spawn bundle.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::anim::AnimationController;
use crate::core::SessionTuning;
use crate::player::components::{
    ActiveHitbox, AttackControl, AutoJumpState, GameLayer, HitboxClass, HurtState, Lives,
    Locomotion, MovementStatus, Player,
};

pub(crate) fn spawn_player(
    commands: &mut Commands,
    tuning: &SessionTuning,
    position: Vec2,
) -> Entity {
    let hitbox = HitboxClass::Grounded;
    let size = hitbox.size();

    commands
        .spawn((
            Player,
            Locomotion {
                target_x: position.x,
                ..default()
            },
            MovementStatus::default(),
            Lives {
                remaining: tuning.starting_lives,
            },
            HurtState::default(),
            AutoJumpState::default(),
            AttackControl::default(),
            ActiveHitbox(hitbox),
            AnimationController::default(),
            Sprite {
                color: Color::srgb(0.9, 0.9, 0.85),
                custom_size: Some(size),
                ..default()
            },
            Transform::from_xyz(position.x, position.y, 10.0),
            (
                RigidBody::Dynamic,
                Collider::rectangle(size.x, size.y),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                CollisionLayers::new(GameLayer::Player, [GameLayer::Ground]),
            ),
        ))
        .id()
}
