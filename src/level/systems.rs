//! Level domain: per-level setup, zone intersection checks, completion.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::battle::BattleState;
use crate::content::{ContentRegistry, LevelDef};
use crate::core::{GameState, InputOwner, SessionConfig, SessionRng, SessionTuning};
use crate::enemies::spawn_enemies;
use crate::level::events::LevelCompletedEvent;
use crate::level::results::LevelResult;
use crate::player::{AutoJumpEvent, GameLayer, MovementStatus, Player, spawn_player};
use crate::score::ScoreManager;
use crate::typing::MovementTyping;

/// The level currently being played.
#[derive(Resource, Debug)]
pub struct ActiveLevel {
    pub def: LevelDef,
}

/// Marker for level-lifetime geometry entities.
#[derive(Component, Debug)]
pub struct LevelGeometry;

const GROUND_THICKNESS: f32 = 40.0;
const DEFAULT_SPAWN_HEIGHT: f32 = 40.0;

pub(crate) fn setup_level(
    mut commands: Commands,
    time: Res<Time>,
    tuning: Res<SessionTuning>,
    config: Res<SessionConfig>,
    registry: Res<ContentRegistry>,
    mut rng: ResMut<SessionRng>,
    mut typing: ResMut<MovementTyping>,
    mut battle: ResMut<BattleState>,
    mut score: ResMut<ScoreManager>,
    mut owner: ResMut<InputOwner>,
) {
    let level = registry.level_or_fallback(&config.level_id);
    info!("Starting level '{}' with seed {}", level.id, config.seed);

    *rng = SessionRng::from_seed(config.seed);

    // Ground slab spanning the level.
    commands.spawn((
        LevelGeometry,
        Sprite {
            color: Color::srgb(0.25, 0.3, 0.25),
            custom_size: Some(Vec2::new(level.length, GROUND_THICKNESS)),
            ..default()
        },
        Transform::from_xyz(level.length / 2.0, level.ground_y - GROUND_THICKNESS / 2.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(level.length, GROUND_THICKNESS),
        CollisionLayers::new(GameLayer::Ground, [GameLayer::Player, GameLayer::Enemy]),
    ));

    let spawn_pos = match level.player_spawn {
        Some((x, y)) => Vec2::new(x, y),
        None => {
            warn!(
                "Level '{}' has no player spawn, using default position",
                level.id
            );
            Vec2::new(0.0, level.ground_y + DEFAULT_SPAWN_HEIGHT)
        }
    };
    spawn_player(&mut commands, &tuning, spawn_pos);

    let spawned = spawn_enemies(&mut commands, &registry, &level);
    info!("Spawned {} enemies", spawned);

    *typing = MovementTyping::new(
        level.movement_chars(),
        tuning.movement_sequence_groups,
        &mut rng.0,
    );

    battle.reset();
    battle.alphabet = level.battle_chars();

    *score = ScoreManager::new(tuning.input_debounce, tuning.sample_interval);
    score.begin(time.elapsed_secs_f64());

    *owner = InputOwner::Movement;

    commands.insert_resource(ActiveLevel { def: level });
}

/// Zone intersections, run after the player's per-frame state update so
/// auto-jump sees current grounded state.
pub(crate) fn check_zones(
    time: Res<Time>,
    level: Option<Res<ActiveLevel>>,
    player_query: Query<(&Transform, &MovementStatus), With<Player>>,
    mut typing: ResMut<MovementTyping>,
    mut score: ResMut<ScoreManager>,
    mut owner: ResMut<InputOwner>,
    mut auto_jump: MessageWriter<AutoJumpEvent>,
    mut completed: MessageWriter<LevelCompletedEvent>,
    mut game_state: ResMut<NextState<GameState>>,
) {
    let Some(level) = level else {
        return;
    };
    let Ok((transform, status)) = player_query.single() else {
        return;
    };
    let position = transform.translation.truncate();

    if status.on_ground {
        for zone in &level.def.auto_jump_zones {
            if zone.contains(position) {
                auto_jump.write(AutoJumpEvent);
                break;
            }
        }
    }

    if level.def.finish_zone.contains(position) {
        let now = time.elapsed_secs_f64();
        score.finish(now);
        let result = LevelResult::from_score(&score, now);

        match serde_json::to_string(&result) {
            Ok(json) => info!("Level complete: {}", json),
            Err(e) => warn!("Level complete (result not serializable: {})", e),
        }

        typing.active = false;
        *owner = InputOwner::None;
        completed.write(LevelCompletedEvent { result });
        game_state.set(GameState::LevelComplete);
    }
}

/// Side-scroll camera: track the avatar horizontally.
pub(crate) fn camera_follow(
    player_query: Query<&Transform, (With<Player>, Without<Camera2d>)>,
    mut camera_query: Query<&mut Transform, (With<Camera2d>, Without<Player>)>,
) {
    let Ok(player) = player_query.single() else {
        return;
    };
    let Ok(mut camera) = camera_query.single_mut() else {
        return;
    };
    camera.translation.x = player.translation.x + 200.0;
}

pub(crate) fn cleanup_level(
    mut commands: Commands,
    geometry: Query<Entity, With<LevelGeometry>>,
    players: Query<Entity, With<Player>>,
    mut owner: ResMut<InputOwner>,
    mut typing: ResMut<MovementTyping>,
) {
    for entity in geometry.iter().chain(players.iter()) {
        commands.entity(entity).despawn();
    }
    *owner = InputOwner::None;
    typing.active = false;
    commands.remove_resource::<ActiveLevel>();
}
