//! Typing domain: keyboard decoding and movement-sequence dispatch.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::input::ButtonState;
use bevy::input::keyboard::{Key, KeyboardInput};
use bevy::prelude::*;

use crate::core::{GameState, InputOwner, SessionRng, SessionTuning};
use crate::score::{ScoreContext, ScoreManager};
use crate::typing::events::{AdvanceEvent, SequenceChangedEvent};
use crate::typing::resources::MovementTyping;
use crate::typing::sequence::{SequenceKind, Symbol};

/// Map a logical key to an input symbol. Non-typing keys produce None and
/// fall through untouched.
pub(crate) fn key_symbol(key: &Key) -> Option<Symbol> {
    match key {
        Key::Space => Some(Symbol::Space),
        Key::Character(text) => {
            let mut chars = text.chars();
            let first = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            Some(Symbol::Char(first))
        }
        _ => None,
    }
}

/// Validate movement keystrokes against the movement sequence.
///
/// Only runs its body while the ownership token is Movement; otherwise key
/// events are dropped unread so a later hand-back cannot replay stale
/// battle keystrokes into the movement sequence.
pub(crate) fn process_movement_keystrokes(
    time: Res<Time>,
    tuning: Res<SessionTuning>,
    state: Res<State<GameState>>,
    owner: Res<InputOwner>,
    mut typing: ResMut<MovementTyping>,
    mut score: ResMut<ScoreManager>,
    mut rng: ResMut<SessionRng>,
    mut keys: MessageReader<KeyboardInput>,
    mut sequence_changed: MessageWriter<SequenceChangedEvent>,
    mut advance: MessageWriter<AdvanceEvent>,
) {
    // Runs in every state so menu/pause keystrokes drain instead of
    // replaying into the sequence on the first gameplay frame.
    if *state.get() != GameState::Playing || *owner != InputOwner::Movement || !typing.active {
        keys.clear();
        return;
    }

    let now = time.elapsed_secs_f64();

    for key in keys.read() {
        if key.state != ButtonState::Pressed {
            continue;
        }
        let Some(typed) = key_symbol(&key.logical_key) else {
            continue;
        };
        if typing.in_debounce(now, tuning.input_debounce) {
            continue;
        }
        let Some(expected) = typing.sequence.expected() else {
            continue;
        };
        typing.note_keystroke(now);

        if expected.accepts(typed) {
            score.record_correct(now, ScoreContext::Movement);
            typing.sequence.advance();
            if typing.sequence.is_complete() {
                let rng = &mut rng.0;
                typing.reset_sequence(rng);
            }
            sequence_changed.write(SequenceChangedEvent {
                kind: SequenceKind::Movement,
            });
            // Group separators confirm the group but authorize no travel;
            // only character matches move the avatar.
            if expected != Symbol::Space {
                advance.write(AdvanceEvent {
                    distance: tuning.distance_per_keystroke,
                });
            }
        } else {
            score.record_incorrect(now, ScoreContext::Movement);
        }
    }
}
