//! Level domain: tests for the result record and session scenarios.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::results::LevelResult;
use crate::score::{ScoreContext, ScoreManager};
use crate::typing::{MovementTyping, Symbol};

#[test]
fn test_result_record_from_score() {
    let mut score = ScoreManager::new(0.05, 2.0);
    score.begin(0.0);
    score.record_correct(0.5, ScoreContext::Movement);
    score.record_correct(1.0, ScoreContext::Movement);
    score.record_incorrect(1.5, ScoreContext::Movement);
    score.tick(2.0);
    score.finish(90.0);

    let result = LevelResult::from_score(&score, 120.0);
    assert_eq!(result.elapsed_time, 90.0);
    assert!((result.accuracy - 200.0 / 3.0).abs() < 0.01);
    assert_eq!(result.error_count, 1);
    assert_eq!(result.speed_samples.len(), 1);
    assert_eq!(result.score, score.final_score(90.0));
}

#[test]
fn test_result_serializes_for_the_reporting_boundary() {
    let mut score = ScoreManager::new(0.05, 2.0);
    score.begin(0.0);
    score.record_correct(0.5, ScoreContext::Movement);
    score.tick(2.0);
    score.finish(10.0);

    let result = LevelResult::from_score(&score, 10.0);
    let json = serde_json::to_string(&result).expect("result serializes");
    for key in [
        "elapsed_time",
        "accuracy",
        "average_speed",
        "score",
        "error_count",
        "speed_samples",
    ] {
        assert!(json.contains(key), "missing '{}' in {}", key, json);
    }
}

/// Full movement pass over a one-group sequence: four characters and the
/// separator. Every symbol is typed correctly; only the characters
/// authorize travel.
#[test]
fn test_movement_sequence_pass_advances_four_keystrokes() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut typing = MovementTyping::new("abc".chars().collect(), 1, &mut rng);
    let mut score = ScoreManager::new(0.05, 2.0);
    score.begin(0.0);

    let distance_per_keystroke = 24.0;
    let mut travelled = 0.0;
    let mut now = 0.0;

    assert_eq!(typing.sequence.len(), 5);

    for _ in 0..5 {
        now += 0.1;
        let expected = typing.sequence.expected().expect("symbol available");
        // Type exactly the expected symbol.
        assert!(!typing.in_debounce(now, 0.05));
        typing.note_keystroke(now);
        score.record_correct(now, ScoreContext::Movement);
        typing.sequence.advance();
        if expected != Symbol::Space {
            travelled += distance_per_keystroke;
        }
    }

    assert_eq!(travelled, 4.0 * distance_per_keystroke);
    assert!(typing.sequence.is_complete());
    assert_eq!(score.correct_count(), 5);

    // Completion regenerates wholesale with the cursor back at zero.
    typing.reset_sequence(&mut rng);
    assert_eq!(typing.sequence.cursor(), 0);
    assert_eq!(typing.sequence.len(), 5);
}
