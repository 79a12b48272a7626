//! Enemies domain: components for patrol and death state machines.

use bevy::prelude::*;

use crate::content::EnemyDef;

#[derive(Component, Debug)]
pub struct Enemy {
    pub def_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PatrolPhase {
    #[default]
    Walking,
    /// Idle pause at a patrol end before reversing.
    Pausing,
    /// Frozen for a battle; leaves only via despawn or battle teardown.
    Held,
}

/// Back-and-forth patrol around the spawn point with idle pauses.
#[derive(Component, Debug)]
pub struct Patrol {
    pub origin_x: f32,
    /// +1 right, -1 left.
    pub direction: f32,
    pub range: f32,
    pub pause: f32,
    pub speed: f32,
    pub phase: PatrolPhase,
    pub timer: f32,
}

impl Patrol {
    pub fn new(origin_x: f32, def: &EnemyDef) -> Self {
        Self {
            origin_x,
            direction: 1.0,
            range: def.patrol_range,
            pause: def.patrol_pause,
            speed: def.move_speed,
            phase: PatrolPhase::Walking,
            timer: 0.0,
        }
    }

    /// Advance the machine one frame at position `x`; returns the
    /// horizontal velocity to apply. Callers watch `phase` for animation
    /// transitions.
    pub fn step(&mut self, x: f32, dt: f32) -> f32 {
        match self.phase {
            PatrolPhase::Walking => {
                let offset = x - self.origin_x;
                if offset * self.direction >= self.range {
                    self.phase = PatrolPhase::Pausing;
                    self.timer = self.pause;
                    0.0
                } else {
                    self.direction * self.speed
                }
            }
            PatrolPhase::Pausing => {
                self.timer -= dt;
                if self.timer <= 0.0 {
                    self.direction = -self.direction;
                    self.phase = PatrolPhase::Walking;
                    self.direction * self.speed
                } else {
                    0.0
                }
            }
            PatrolPhase::Held => 0.0,
        }
    }

    /// Freeze for a battle: cancels any pending pause and faces the player.
    /// Idempotent.
    pub fn stop_for_battle(&mut self, toward_player: f32) {
        self.phase = PatrolPhase::Held;
        self.timer = 0.0;
        if toward_player != 0.0 {
            self.direction = toward_player.signum();
        }
    }

    pub fn is_held(&self) -> bool {
        self.phase == PatrolPhase::Held
    }
}

/// Transient hit reaction during a battle.
#[derive(Component, Debug)]
pub struct HitReacting {
    pub timer: f32,
}

/// Terminal state: knockback, fade, despawn at zero.
#[derive(Component, Debug)]
pub struct EnemyDying {
    pub timer: f32,
    pub total: f32,
}
