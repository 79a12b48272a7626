//! Core domain: shared resources for session tuning, input ownership, and RNG.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// All gameplay tunables in one place. Components receive these at
/// construction instead of reaching for scattered constants.
#[derive(Resource, Debug, Clone)]
pub struct SessionTuning {
    /// Post-keystroke window during which further key events are ignored.
    /// Rejects OS auto-repeat and double counting of one physical press.
    pub input_debounce: f64,
    /// Euclidean distance to a living enemy that starts a battle.
    pub battle_trigger_radius: f32,
    /// Symbols in a freshly generated battle sequence.
    pub battle_sequence_length: usize,
    /// Seconds per attack-countdown cycle during an active battle.
    pub attack_countdown: f32,
    /// Duration of the non-interactive pre-battle warning.
    pub battle_announce_duration: f32,
    /// Remaining distance-to-target above which the avatar runs instead of walks.
    pub run_threshold: f32,
    /// Horizontal distance authorized per correct movement keystroke.
    pub distance_per_keystroke: f32,
    /// Seconds between typing-speed samples.
    pub sample_interval: f64,
    /// Groups of four characters per movement sequence regeneration.
    pub movement_sequence_groups: usize,

    pub walk_speed: f32,
    pub run_speed: f32,
    /// Horizontal speed floor applied while airborne and still moving.
    pub air_speed: f32,
    pub auto_jump_impulse: Vec2,
    /// How far past the jump origin an auto-jump authorizes travel.
    pub auto_jump_reach: f32,
    pub auto_jump_cooldown: f32,

    pub starting_lives: u32,
    /// Post-hit invulnerability/cue window.
    pub hurt_duration: f32,
    /// Delay between death and the return-to-map hand-off.
    pub death_delay: f32,
    /// Delay between an enemy's defeat and its despawn.
    pub enemy_despawn_delay: f32,
    /// Duration of an enemy's transient hit reaction.
    pub enemy_hit_reaction: f32,
    pub enemy_knockback: f32,

    /// Camera scale while a battle is active.
    pub battle_camera_scale: f32,
}

impl Default for SessionTuning {
    fn default() -> Self {
        Self {
            input_debounce: 0.05,
            battle_trigger_radius: 120.0,
            battle_sequence_length: 8,
            attack_countdown: 5.0,
            battle_announce_duration: 1.0,
            run_threshold: 160.0,
            distance_per_keystroke: 24.0,
            sample_interval: 2.0,
            movement_sequence_groups: 6,
            walk_speed: 120.0,
            run_speed: 260.0,
            air_speed: 140.0,
            auto_jump_impulse: Vec2::new(140.0, 520.0),
            auto_jump_reach: 140.0,
            auto_jump_cooldown: 1.0,
            starting_lives: 5,
            hurt_duration: 0.3,
            death_delay: 2.0,
            enemy_despawn_delay: 1.0,
            enemy_hit_reaction: 0.35,
            enemy_knockback: 160.0,
            battle_camera_scale: 0.75,
        }
    }
}

/// Single-owner token for keyboard dispatch. Exactly one consumer may act on
/// key events at any instant; the others drop them unread.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputOwner {
    #[default]
    None,
    Movement,
    Battle,
}

/// Which level the next session plays, plus its seed.
#[derive(Resource, Debug, Clone)]
pub struct SessionConfig {
    pub level_id: String,
    pub seed: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            level_id: "level_meadow".to_string(),
            seed: rand::rng().random(),
        }
    }
}

/// Seeded RNG for sequence generation and attack-variant picks.
/// Seeding from [`SessionConfig`] keeps generated sequences reproducible.
#[derive(Resource, Debug)]
pub struct SessionRng(pub ChaCha8Rng);

impl SessionRng {
    pub fn from_seed(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl Default for SessionRng {
    fn default() -> Self {
        Self::from_seed(rand::rng().random())
    }
}
