//! Score domain: tests for accounting, sampling, and the score formula.

use super::manager::{ScoreContext, ScoreManager};

fn manager() -> ScoreManager {
    let mut score = ScoreManager::new(0.05, 2.0);
    score.begin(0.0);
    score
}

// -----------------------------------------------------------------------------
// Debounce tests
// -----------------------------------------------------------------------------

#[test]
fn test_correct_records_within_debounce_count_once() {
    let mut score = manager();
    assert!(score.record_correct(1.0, ScoreContext::Movement));
    assert!(!score.record_correct(1.03, ScoreContext::Movement));
    assert_eq!(score.correct_count(), 1);
    assert_eq!(score.total_count(), 1);
}

#[test]
fn test_debounce_is_shared_across_outcomes() {
    let mut score = manager();
    assert!(score.record_correct(1.0, ScoreContext::Movement));
    // The same physical keystroke reported as incorrect by another layer
    // must not double count.
    assert!(!score.record_incorrect(1.02, ScoreContext::Movement));
    assert_eq!(score.total_count(), 1);
    assert_eq!(score.incorrect_count(), 0);
}

#[test]
fn test_records_outside_debounce_both_count() {
    let mut score = manager();
    assert!(score.record_correct(1.0, ScoreContext::Movement));
    assert!(score.record_correct(1.06, ScoreContext::Movement));
    assert_eq!(score.correct_count(), 2);
}

// -----------------------------------------------------------------------------
// Accuracy tests
// -----------------------------------------------------------------------------

#[test]
fn test_accuracy_zero_without_input() {
    let score = manager();
    assert_eq!(score.accuracy(), 0.0);
}

#[test]
fn test_accuracy_three_of_four() {
    let mut score = manager();
    score.record_correct(1.0, ScoreContext::Movement);
    score.record_correct(2.0, ScoreContext::Movement);
    score.record_correct(3.0, ScoreContext::Movement);
    score.record_incorrect(4.0, ScoreContext::Movement);
    assert_eq!(score.accuracy(), 75.0);
}

#[test]
fn test_battle_context_is_tallied_separately() {
    let mut score = manager();
    score.record_correct(1.0, ScoreContext::Movement);
    score.record_correct(2.0, ScoreContext::Battle);
    score.record_correct(3.0, ScoreContext::Battle);
    assert_eq!(score.correct_count(), 3);
    assert_eq!(score.battle_correct_count(), 2);
}

// -----------------------------------------------------------------------------
// Sampling tests
// -----------------------------------------------------------------------------

#[test]
fn test_no_sample_before_interval() {
    let mut score = manager();
    score.record_correct(0.5, ScoreContext::Movement);
    score.tick(1.9);
    assert!(score.samples().is_empty());
}

#[test]
fn test_sample_speed_is_correct_per_minute() {
    let mut score = manager();
    // 4 correct keystrokes over a 2-second window = 120 cpm.
    score.record_correct(0.2, ScoreContext::Movement);
    score.record_correct(0.6, ScoreContext::Movement);
    score.record_correct(1.0, ScoreContext::Movement);
    score.record_correct(1.4, ScoreContext::Movement);
    score.tick(2.0);

    assert_eq!(score.samples().len(), 1);
    let sample = score.samples()[0];
    assert_eq!(sample.at_secs, 2.0);
    assert!((sample.cpm - 120.0).abs() < 0.01);
}

#[test]
fn test_window_resets_after_sample() {
    let mut score = manager();
    score.record_correct(1.0, ScoreContext::Movement);
    score.tick(2.0);
    // Empty follow-up window samples zero speed.
    score.tick(4.0);
    assert_eq!(score.samples().len(), 2);
    assert_eq!(score.samples()[1].cpm, 0.0);
}

#[test]
fn test_average_speed_is_mean_of_samples() {
    let mut score = manager();
    score.record_correct(0.5, ScoreContext::Movement);
    score.record_correct(1.0, ScoreContext::Movement);
    score.tick(2.0); // 60 cpm
    score.tick(4.0); // 0 cpm
    assert!((score.average_speed() - 30.0).abs() < 0.01);
}

#[test]
fn test_average_speed_zero_without_samples() {
    assert_eq!(manager().average_speed(), 0.0);
}

// -----------------------------------------------------------------------------
// Score formula tests
// -----------------------------------------------------------------------------

#[test]
fn test_final_score_formula_exact() {
    let mut score = manager();
    // 2 correct in a 2-second window = 60 cpm, one sample.
    score.record_correct(0.5, ScoreContext::Movement);
    score.record_correct(1.0, ScoreContext::Movement);
    score.tick(2.0);
    score.record_incorrect(3.0, ScoreContext::Movement);

    // avg = 60, accuracy = 2/3, time = 90s:
    // 60 * (2/3) * (1 + (1 - 90/180)) - 1*5 = 60 - 5 = 55
    assert_eq!(score.final_score(90.0), 55);
}

#[test]
fn test_final_score_floors_at_zero() {
    let mut score = manager();
    for i in 0..10 {
        score.record_incorrect(f64::from(i), ScoreContext::Movement);
    }
    assert_eq!(score.final_score(60.0), 0);
}

#[test]
fn test_final_score_monotonic_in_speed_and_errors() {
    // Higher average speed, same errors: score must not decrease.
    let mut slow = manager();
    slow.record_correct(0.5, ScoreContext::Movement);
    slow.tick(2.0);

    let mut fast = manager();
    fast.record_correct(0.3, ScoreContext::Movement);
    fast.record_correct(0.6, ScoreContext::Movement);
    fast.record_correct(0.9, ScoreContext::Movement);
    fast.tick(2.0);

    assert!(fast.final_score(60.0) >= slow.final_score(60.0));

    // More errors, same speed: score must not increase.
    let mut clean = manager();
    clean.record_correct(0.5, ScoreContext::Movement);
    clean.tick(2.0);

    let mut sloppy = manager();
    sloppy.record_correct(0.5, ScoreContext::Movement);
    sloppy.tick(2.0);
    sloppy.record_incorrect(3.0, ScoreContext::Movement);
    sloppy.record_incorrect(4.0, ScoreContext::Movement);

    assert!(sloppy.final_score(60.0) <= clean.final_score(60.0));
}

// -----------------------------------------------------------------------------
// Session lifecycle tests
// -----------------------------------------------------------------------------

#[test]
fn test_begin_resets_everything() {
    let mut score = manager();
    score.record_correct(1.0, ScoreContext::Battle);
    score.record_incorrect(2.0, ScoreContext::Movement);
    score.tick(3.0);

    score.begin(10.0);
    assert_eq!(score.correct_count(), 0);
    assert_eq!(score.incorrect_count(), 0);
    assert_eq!(score.total_count(), 0);
    assert_eq!(score.battle_correct_count(), 0);
    assert!(score.samples().is_empty());
    assert_eq!(score.elapsed(15.0), 5.0);
}

#[test]
fn test_elapsed_uses_finish_time_once_set() {
    let mut score = manager();
    score.finish(42.0);
    assert_eq!(score.elapsed(100.0), 42.0);
}
