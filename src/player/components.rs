//! Player domain: components and physics layers for the avatar.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering.
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    Ground,
    Player,
    Enemy,
}

#[derive(Component, Debug)]
pub struct Player;

/// Where continuous typing input has authorized the avatar to travel to.
#[derive(Component, Debug, Default)]
pub struct Locomotion {
    pub target_x: f32,
    pub moving: bool,
    pub running: bool,
}

impl Locomotion {
    pub fn remaining(&self, x: f32) -> f32 {
        self.target_x - x
    }
}

/// Grounded gait, decided by remaining authorized distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gait {
    Idle,
    Walk,
    Run,
}

pub fn gait_for(remaining: f32, run_threshold: f32) -> Gait {
    if remaining <= 0.0 {
        Gait::Idle
    } else if remaining > run_threshold {
        Gait::Run
    } else {
        Gait::Walk
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalState {
    #[default]
    Grounded,
    Rising,
    Falling,
}

#[derive(Component, Debug, Default)]
pub struct MovementStatus {
    pub on_ground: bool,
    pub vertical: VerticalState,
}

#[derive(Component, Debug)]
pub struct Lives {
    pub remaining: u32,
}

/// Post-hit invulnerability and visible damage cue window. Zero = inactive.
#[derive(Component, Debug, Default)]
pub struct HurtState {
    pub timer: f32,
}

impl HurtState {
    pub fn is_hurt(&self) -> bool {
        self.timer > 0.0
    }
}

/// Auto-jump re-trigger guard. Zero = ready.
#[derive(Component, Debug, Default)]
pub struct AutoJumpState {
    pub cooldown: f32,
}

/// The attack variant currently playing, if any. Cleared when that
/// specific variant's clip reports completion.
#[derive(Component, Debug, Default)]
pub struct AttackControl {
    pub active: Option<crate::anim::AttackVariant>,
}

/// Terminal death countdown; expiry hands the session back to the map.
#[derive(Component, Debug)]
pub struct PlayerDying {
    pub timer: f32,
}

/// The hitbox contract is per state class: grounded locomotion shares one
/// box, airborne states use a narrower one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HitboxClass {
    #[default]
    Grounded,
    Air,
}

#[derive(Component, Debug, Default)]
pub struct ActiveHitbox(pub HitboxClass);

pub const GROUNDED_HITBOX: Vec2 = Vec2::new(28.0, 48.0);
pub const AIR_HITBOX: Vec2 = Vec2::new(20.0, 44.0);

impl HitboxClass {
    pub fn size(&self) -> Vec2 {
        match self {
            HitboxClass::Grounded => GROUNDED_HITBOX,
            HitboxClass::Air => AIR_HITBOX,
        }
    }
}
