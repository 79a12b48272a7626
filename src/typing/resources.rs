//! Typing domain: movement-sequence dispatch state.

use bevy::prelude::*;
use rand::Rng;

use super::sequence::TypeSequence;

/// The long, continuously regenerated movement sequence plus the dispatch
/// flags for it. Battle sequences live with the battle session instead.
#[derive(Resource, Debug, Default)]
pub struct MovementTyping {
    pub sequence: TypeSequence,
    pub alphabet: Vec<char>,
    pub groups: usize,
    /// Enable/disable without giving up ownership (completion freeze).
    pub active: bool,
    /// Time of the last processed keystroke, for the debounce window.
    pub last_keystroke: Option<f64>,
}

impl MovementTyping {
    pub fn new(alphabet: Vec<char>, groups: usize, rng: &mut impl Rng) -> Self {
        let sequence = TypeSequence::grouped(&alphabet, groups, rng);
        Self {
            sequence,
            alphabet,
            groups,
            active: true,
            last_keystroke: None,
        }
    }

    pub fn in_debounce(&self, now: f64, window: f64) -> bool {
        self.last_keystroke
            .is_some_and(|last| now - last < window)
    }

    pub fn note_keystroke(&mut self, now: f64) {
        self.last_keystroke = Some(now);
    }

    /// Wholesale regeneration with cursor back at zero.
    pub fn reset_sequence(&mut self, rng: &mut impl Rng) {
        self.sequence = TypeSequence::grouped(&self.alphabet, self.groups, rng);
    }
}
