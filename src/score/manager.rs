//! Score domain: keystroke accounting, speed sampling, and the final score.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Session length the score formula normalizes against, in seconds.
const TIME_NORMALIZATION_SECS: f64 = 180.0;
/// Points lost per incorrect keystroke.
const ERROR_PENALTY: f64 = 5.0;
/// Floor for the sampling-window duration, so a near-empty window cannot
/// divide by zero or produce an absurd spike.
const MIN_WINDOW_MINUTES: f64 = 1.0 / 600.0;

/// Where a recorded keystroke came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreContext {
    Movement,
    Battle,
}

/// One point-in-time typing speed estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeedSample {
    /// Seconds since the session started.
    pub at_secs: f32,
    /// Correct keystrokes per minute over the sampling window.
    pub cpm: f32,
}

/// Accumulates keystroke outcomes for one level session.
///
/// Counters only ever grow; `begin` starts a fresh session at level entry.
/// Both record paths share one debounce so a single physical keystroke
/// reported by two layers still counts once.
#[derive(Resource, Debug)]
pub struct ScoreManager {
    correct: u32,
    incorrect: u32,
    total: u32,
    battle_correct: u32,
    window_correct: u32,
    window_started: f64,
    samples: Vec<SpeedSample>,
    started_at: f64,
    ended_at: Option<f64>,
    last_record: Option<f64>,
    debounce: f64,
    sample_interval: f64,
}

impl Default for ScoreManager {
    fn default() -> Self {
        Self::new(0.05, 2.0)
    }
}

impl ScoreManager {
    pub fn new(debounce: f64, sample_interval: f64) -> Self {
        Self {
            correct: 0,
            incorrect: 0,
            total: 0,
            battle_correct: 0,
            window_correct: 0,
            window_started: 0.0,
            samples: Vec::new(),
            started_at: 0.0,
            ended_at: None,
            last_record: None,
            debounce,
            sample_interval,
        }
    }

    /// Start a fresh session at `now`.
    pub fn begin(&mut self, now: f64) {
        self.correct = 0;
        self.incorrect = 0;
        self.total = 0;
        self.battle_correct = 0;
        self.window_correct = 0;
        self.window_started = now;
        self.samples.clear();
        self.started_at = now;
        self.ended_at = None;
        self.last_record = None;
    }

    fn debounced(&mut self, now: f64) -> bool {
        if self.last_record.is_some_and(|last| now - last < self.debounce) {
            return true;
        }
        self.last_record = Some(now);
        false
    }

    /// Returns false if the call fell inside the debounce window.
    pub fn record_correct(&mut self, now: f64, context: ScoreContext) -> bool {
        if self.debounced(now) {
            return false;
        }
        self.correct += 1;
        self.total += 1;
        self.window_correct += 1;
        if context == ScoreContext::Battle {
            self.battle_correct += 1;
        }
        true
    }

    /// Returns false if the call fell inside the debounce window.
    pub fn record_incorrect(&mut self, now: f64, _context: ScoreContext) -> bool {
        if self.debounced(now) {
            return false;
        }
        self.incorrect += 1;
        self.total += 1;
        true
    }

    /// Take a speed sample if the sampling interval has elapsed.
    pub fn tick(&mut self, now: f64) {
        let window_secs = now - self.window_started;
        if window_secs < self.sample_interval {
            return;
        }
        let minutes = (window_secs / 60.0).max(MIN_WINDOW_MINUTES);
        let cpm = self.window_correct as f64 / minutes;
        self.samples.push(SpeedSample {
            at_secs: (now - self.started_at) as f32,
            cpm: cpm as f32,
        });
        self.window_correct = 0;
        self.window_started = now;
    }

    pub fn finish(&mut self, now: f64) {
        self.ended_at = Some(now);
    }

    /// Percentage of recorded keystrokes that were correct; 0 with no input.
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        f64::from(self.correct) / f64::from(self.total) * 100.0
    }

    /// Arithmetic mean of all speed samples; 0 with no samples.
    pub fn average_speed(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.samples.iter().map(|s| f64::from(s.cpm)).sum();
        sum / self.samples.len() as f64
    }

    /// Final score: speed weighted by accuracy and a time bonus against a
    /// 180-second baseline, minus five points per error, floored at zero.
    pub fn final_score(&self, time_taken_secs: f64) -> u32 {
        let speed = self.average_speed();
        let accuracy = self.accuracy() / 100.0;
        let time_bonus = 1.0 + (1.0 - time_taken_secs / TIME_NORMALIZATION_SECS);
        let raw = speed * accuracy * time_bonus - f64::from(self.incorrect) * ERROR_PENALTY;
        raw.max(0.0).round() as u32
    }

    pub fn elapsed(&self, now: f64) -> f64 {
        self.ended_at.unwrap_or(now) - self.started_at
    }

    pub fn correct_count(&self) -> u32 {
        self.correct
    }

    pub fn incorrect_count(&self) -> u32 {
        self.incorrect
    }

    pub fn total_count(&self) -> u32 {
        self.total
    }

    pub fn battle_correct_count(&self) -> u32 {
        self.battle_correct
    }

    pub fn samples(&self) -> &[SpeedSample] {
        &self.samples
    }
}
