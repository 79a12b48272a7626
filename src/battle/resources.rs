//! Battle domain: the duel session state machine.

use bevy::prelude::*;

use crate::typing::TypeSequence;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BattlePhase {
    #[default]
    Idle,
    /// Non-interactive warning before the duel.
    Announcing,
    /// Countdown racing keystroke validation.
    Active,
    /// One-frame outcome application and teardown.
    Resolving,
}

/// The battle session. Exists for the whole level; `phase == Idle` means no
/// battle is running and every field besides the alphabet is dormant.
#[derive(Resource, Debug, Default)]
pub struct BattleState {
    pub phase: BattlePhase,
    pub enemy: Option<Entity>,
    pub sequence: TypeSequence,
    /// Characters battle sequences draw from; set at level entry.
    pub alphabet: Vec<char>,
    pub announce_timer: f32,
    pub countdown: f32,
    countdown_full: f32,
    /// False during the announcement, true during the active duel.
    pub input_active: bool,
    pub last_keystroke: Option<f64>,
    pub victory: bool,
    pub saved_camera_scale: Option<f32>,
}

impl BattleState {
    pub fn begin_announcing(&mut self, enemy: Entity, announce_duration: f32) {
        self.phase = BattlePhase::Announcing;
        self.enemy = Some(enemy);
        self.announce_timer = announce_duration;
        self.input_active = false;
        self.last_keystroke = None;
        self.victory = false;
    }

    /// Returns true when the announcement just expired.
    pub fn tick_announce(&mut self, dt: f32) -> bool {
        if self.phase != BattlePhase::Announcing {
            return false;
        }
        self.announce_timer -= dt;
        self.announce_timer <= 0.0
    }

    pub fn activate(&mut self, sequence: TypeSequence, countdown: f32) {
        self.phase = BattlePhase::Active;
        self.sequence = sequence;
        self.countdown = countdown;
        self.countdown_full = countdown;
        self.input_active = true;
    }

    /// Advance the attack countdown. Returns true each time it expires; the
    /// countdown resets to full and the duel keeps going. The timeout is a
    /// repeating penalty, not a failure state.
    pub fn tick_countdown(&mut self, dt: f32) -> bool {
        if self.phase != BattlePhase::Active {
            return false;
        }
        self.countdown -= dt;
        if self.countdown <= 0.0 {
            self.countdown = self.countdown_full;
            return true;
        }
        false
    }

    pub fn in_debounce(&self, now: f64, window: f64) -> bool {
        self.last_keystroke
            .is_some_and(|last| now - last < window)
    }

    pub fn note_keystroke(&mut self, now: f64) {
        self.last_keystroke = Some(now);
    }

    /// Back to Idle. The level-lifetime alphabet survives; everything else
    /// is dormant again. Safe to call in any phase.
    pub fn reset(&mut self) {
        self.phase = BattlePhase::Idle;
        self.enemy = None;
        self.sequence = TypeSequence::default();
        self.announce_timer = 0.0;
        self.countdown = 0.0;
        self.countdown_full = 0.0;
        self.input_active = false;
        self.last_keystroke = None;
        self.victory = false;
        self.saved_camera_scale = None;
    }

    pub fn is_idle(&self) -> bool {
        self.phase == BattlePhase::Idle
    }
}
