//! Animation state machine and playback.
//!
//! Tagged-variant states with an explicit transition method; frame
//! progression runs per-frame and reports completion of non-looping clips.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Animation states for avatars and enemies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimState {
    #[default]
    Idle,
    Walk,
    Run,
    Jump,
    Fall,
    Attack(AttackVariant),
    Hurt,
    Death,
}

impl AnimState {
    /// Transient states take precedence over locomotion-driven selection
    /// until their clip finishes (Death never yields).
    pub fn is_transient(&self) -> bool {
        matches!(self, AnimState::Attack(_) | AnimState::Hurt | AnimState::Death)
    }
}

/// Attack clip variants; one is picked at random per attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttackVariant {
    Slash,
    Thrust,
    Overhead,
}

impl AttackVariant {
    pub const ALL: [AttackVariant; 3] = [
        AttackVariant::Slash,
        AttackVariant::Thrust,
        AttackVariant::Overhead,
    ];
}

/// Component for animation playback.
#[derive(Component, Debug)]
pub struct AnimationController {
    pub state: AnimState,
    pub previous_state: AnimState,
    pub current_frame: u32,
    pub total_frames: u32,
    pub frame_timer: f32,
    pub frame_duration: f32,
    pub looping: bool,
    /// Set when a non-looping clip has played out.
    pub finished: bool,
}

impl Default for AnimationController {
    fn default() -> Self {
        Self {
            state: AnimState::Idle,
            previous_state: AnimState::Idle,
            current_frame: 0,
            total_frames: 4,
            frame_timer: 0.0,
            frame_duration: 0.15,
            looping: true,
            finished: false,
        }
    }
}

impl AnimationController {
    /// Set the animation state, resetting playback only if the state changed.
    /// Re-entering the current state is a no-op, so per-frame callers never
    /// restart a clip.
    pub fn set_state(&mut self, state: AnimState) {
        if self.state == state {
            return;
        }
        self.previous_state = self.state;
        self.state = state;
        self.current_frame = 0;
        self.frame_timer = 0.0;
        self.finished = false;

        self.looping = matches!(
            state,
            AnimState::Idle | AnimState::Walk | AnimState::Run | AnimState::Fall
        );

        self.total_frames = match state {
            AnimState::Idle => 4,
            AnimState::Walk => 4,
            AnimState::Run => 6,
            AnimState::Jump => 2,
            AnimState::Fall => 2,
            AnimState::Attack(_) => 3,
            AnimState::Hurt => 2,
            AnimState::Death => 4,
        };

        self.frame_duration = match state {
            AnimState::Attack(_) => 0.08,
            AnimState::Hurt => 0.1,
            _ => 0.15,
        };
    }

    /// Whether a transient clip currently blocks locomotion-driven selection.
    pub fn holds_transient(&self) -> bool {
        self.state == AnimState::Death || (self.state.is_transient() && !self.finished)
    }
}

/// Message fired when a non-looping clip completes.
#[derive(Debug)]
pub struct AnimationFinished {
    pub entity: Entity,
    pub state: AnimState,
}

impl Message for AnimationFinished {}

/// System that advances animation frames based on time.
pub(crate) fn update_animation_frames(
    time: Res<Time>,
    mut query: Query<(Entity, &mut AnimationController)>,
    mut finished_events: MessageWriter<AnimationFinished>,
) {
    for (entity, mut controller) in &mut query {
        if controller.finished {
            continue;
        }

        controller.frame_timer += time.delta_secs();

        if controller.frame_timer >= controller.frame_duration {
            controller.frame_timer -= controller.frame_duration;
            controller.current_frame += 1;

            if controller.current_frame >= controller.total_frames {
                if controller.looping {
                    controller.current_frame = 0;
                } else {
                    controller.current_frame = controller.total_frames - 1;
                    controller.finished = true;
                    finished_events.write(AnimationFinished {
                        entity,
                        state: controller.state,
                    });
                }
            }
        }
    }
}
