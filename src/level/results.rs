//! Level domain: the result record handed to the reporting boundary.

use serde::{Deserialize, Serialize};

use crate::score::{ScoreManager, SpeedSample};

/// Everything the external persistence/leaderboard backend consumes,
/// verbatim, at level completion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelResult {
    pub elapsed_time: f32,
    pub accuracy: f32,
    pub average_speed: f32,
    pub score: u32,
    pub error_count: u32,
    pub speed_samples: Vec<SpeedSample>,
}

impl LevelResult {
    pub fn from_score(score: &ScoreManager, now: f64) -> Self {
        let elapsed = score.elapsed(now);
        Self {
            elapsed_time: elapsed as f32,
            accuracy: score.accuracy() as f32,
            average_speed: score.average_speed() as f32,
            score: score.final_score(elapsed),
            error_count: score.incorrect_count(),
            speed_samples: score.samples().to_vec(),
        }
    }
}
