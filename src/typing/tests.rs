//! Typing domain: tests for sequence generation and dispatch state.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::resources::MovementTyping;
use super::sequence::{Symbol, TypeSequence};
use super::systems::key_symbol;
use bevy::input::keyboard::Key;

fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(7)
}

// -----------------------------------------------------------------------------
// Symbol tests
// -----------------------------------------------------------------------------

#[test]
fn test_symbol_match_is_case_insensitive() {
    assert!(Symbol::Char('a').accepts(Symbol::Char('A')));
    assert!(Symbol::Char('Q').accepts(Symbol::Char('q')));
    assert!(!Symbol::Char('a').accepts(Symbol::Char('b')));
}

#[test]
fn test_space_matches_only_space() {
    assert!(Symbol::Space.accepts(Symbol::Space));
    assert!(!Symbol::Space.accepts(Symbol::Char(' ')));
    assert!(!Symbol::Char('a').accepts(Symbol::Space));
}

#[test]
fn test_key_symbol_decoding() {
    assert_eq!(key_symbol(&Key::Space), Some(Symbol::Space));
    assert_eq!(
        key_symbol(&Key::Character("f".into())),
        Some(Symbol::Char('f'))
    );
    assert_eq!(key_symbol(&Key::Enter), None);
    // Multi-char IME output is not a typing symbol.
    assert_eq!(key_symbol(&Key::Character("ab".into())), None);
}

// -----------------------------------------------------------------------------
// Sequence generation tests
// -----------------------------------------------------------------------------

#[test]
fn test_grouped_sequence_shape() {
    let alphabet: Vec<char> = "abc".chars().collect();
    let sequence = TypeSequence::grouped(&alphabet, 4, &mut rng());

    assert_eq!(sequence.len(), 20);
    for (index, symbol) in sequence.symbols().iter().enumerate() {
        if index % 5 == 4 {
            assert_eq!(*symbol, Symbol::Space, "index {} should be Space", index);
        } else {
            match symbol {
                Symbol::Char(c) => assert!(alphabet.contains(c), "'{}' not in alphabet", c),
                Symbol::Space => panic!("unexpected Space at index {}", index),
            }
        }
    }
}

#[test]
fn test_plain_sequence_has_no_spaces() {
    let alphabet: Vec<char> = "qwerty".chars().collect();
    let sequence = TypeSequence::plain(&alphabet, 8, &mut rng());

    assert_eq!(sequence.len(), 8);
    for symbol in sequence.symbols() {
        match symbol {
            Symbol::Char(c) => assert!(alphabet.contains(c)),
            Symbol::Space => panic!("plain sequence must not contain Space"),
        }
    }
}

#[test]
fn test_empty_alphabet_generates_empty_sequence() {
    let sequence = TypeSequence::grouped(&[], 3, &mut rng());
    assert!(sequence.is_empty());
    assert!(sequence.is_complete());
    assert_eq!(sequence.expected(), None);
}

#[test]
fn test_generation_is_deterministic_for_a_seed() {
    let alphabet: Vec<char> = "abcdef".chars().collect();
    let a = TypeSequence::grouped(&alphabet, 3, &mut rng());
    let b = TypeSequence::grouped(&alphabet, 3, &mut rng());
    assert_eq!(a.symbols(), b.symbols());
}

// -----------------------------------------------------------------------------
// Cursor tests
// -----------------------------------------------------------------------------

#[test]
fn test_cursor_advances_to_completion() {
    let alphabet: Vec<char> = "ab".chars().collect();
    let mut sequence = TypeSequence::grouped(&alphabet, 1, &mut rng());

    assert_eq!(sequence.cursor(), 0);
    for _ in 0..5 {
        assert!(sequence.expected().is_some());
        sequence.advance();
    }
    assert_eq!(sequence.cursor(), 5);
    assert!(sequence.is_complete());
    assert_eq!(sequence.expected(), None);

    // Advancing past the end stays clamped.
    sequence.advance();
    assert_eq!(sequence.cursor(), 5);
}

// -----------------------------------------------------------------------------
// MovementTyping tests
// -----------------------------------------------------------------------------

#[test]
fn test_movement_typing_debounce_window() {
    let mut typing = MovementTyping::new("abc".chars().collect(), 2, &mut rng());

    assert!(!typing.in_debounce(1.0, 0.05));
    typing.note_keystroke(1.0);
    assert!(typing.in_debounce(1.02, 0.05));
    assert!(!typing.in_debounce(1.06, 0.05));
}

#[test]
fn test_reset_sequence_regenerates_with_cursor_zero() {
    let mut typing = MovementTyping::new("abc".chars().collect(), 2, &mut rng());
    typing.sequence.advance();
    typing.sequence.advance();
    assert_eq!(typing.sequence.cursor(), 2);

    let mut r = rng();
    typing.reset_sequence(&mut r);
    assert_eq!(typing.sequence.cursor(), 0);
    assert_eq!(typing.sequence.len(), 10);
}
