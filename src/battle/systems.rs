//! Battle domain: proximity trigger, announcement, duel, and teardown.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::input::ButtonState;
use bevy::input::keyboard::KeyboardInput;
use bevy::prelude::*;

use crate::anim::{AnimState, AnimationController, AttackVariant};
use crate::battle::events::{BattlePhaseChangedEvent, EnemyAttackEvent};
use crate::battle::resources::{BattlePhase, BattleState};
use crate::core::{GameState, InputOwner, SessionRng, SessionTuning};
use crate::enemies::{DamageEnemyEvent, Enemy, EnemyDying, HitEnemyEvent, Patrol};
use crate::player::{DamagePlayerEvent, Player, PlayerAttackEvent};
use crate::score::{ScoreContext, ScoreManager};
use crate::typing::{MovementTyping, SequenceChangedEvent, SequenceKind, TypeSequence, key_symbol};

type CameraTransform<'w, 's> =
    Query<'w, 's, &'static mut Transform, (With<Camera2d>, Without<Player>, Without<Enemy>)>;

/// Proximity trigger, checked every frame while no battle runs. The first
/// living enemy within the trigger radius starts a battle; ownership of
/// keyboard dispatch moves to the battle and the enemy is frozen.
pub(crate) fn check_battle_start(
    tuning: Res<SessionTuning>,
    mut battle: ResMut<BattleState>,
    mut owner: ResMut<InputOwner>,
    mut typing: ResMut<MovementTyping>,
    player_query: Query<&Transform, (With<Player>, Without<Enemy>, Without<Camera2d>)>,
    mut enemy_query: Query<
        (
            Entity,
            &Transform,
            &mut Patrol,
            &mut LinearVelocity,
            &mut AnimationController,
        ),
        (With<Enemy>, Without<EnemyDying>, Without<Camera2d>, Without<Player>),
    >,
    mut camera_query: CameraTransform,
    mut phase_changed: MessageWriter<BattlePhaseChangedEvent>,
) {
    if !battle.is_idle() {
        return;
    }
    let Ok(player_transform) = player_query.single() else {
        return;
    };
    let player_pos = player_transform.translation.truncate();

    for (entity, transform, mut patrol, mut velocity, mut anim) in &mut enemy_query {
        let enemy_pos = transform.translation.truncate();
        if player_pos.distance(enemy_pos) > tuning.battle_trigger_radius {
            continue;
        }

        info!("Battle started against {:?}", entity);
        battle.begin_announcing(entity, tuning.battle_announce_duration);

        // Movement dispatch is fully detached, not merely inactive: the
        // ownership token gates its system and it drops key events unread.
        *owner = InputOwner::Battle;
        typing.active = false;

        patrol.stop_for_battle(player_pos.x - enemy_pos.x);
        velocity.x = 0.0;
        if !anim.holds_transient() {
            anim.set_state(AnimState::Idle);
        }

        if let Ok(mut camera) = camera_query.single_mut() {
            battle.saved_camera_scale = Some(camera.scale.x);
            camera.scale = Vec3::splat(tuning.battle_camera_scale);
        }

        phase_changed.write(BattlePhaseChangedEvent {
            phase: BattlePhase::Announcing,
        });
        break;
    }
}

/// End of the warning: generate the battle sequence and open the duel.
pub(crate) fn tick_announcing(
    time: Res<Time>,
    tuning: Res<SessionTuning>,
    mut battle: ResMut<BattleState>,
    mut rng: ResMut<SessionRng>,
    mut phase_changed: MessageWriter<BattlePhaseChangedEvent>,
    mut sequence_changed: MessageWriter<SequenceChangedEvent>,
) {
    if !battle.tick_announce(time.delta_secs()) {
        return;
    }
    let sequence = TypeSequence::plain(
        &battle.alphabet,
        tuning.battle_sequence_length,
        &mut rng.0,
    );
    battle.activate(sequence, tuning.attack_countdown);
    phase_changed.write(BattlePhaseChangedEvent {
        phase: BattlePhase::Active,
    });
    sequence_changed.write(SequenceChangedEvent {
        kind: SequenceKind::Battle,
    });
}

/// Validate duel keystrokes. Matches hit the enemy and advance the battle
/// cursor; completing the sequence resolves the duel. Mismatches are
/// tallied and change nothing else; the countdown is never reset by typing.
pub(crate) fn process_battle_keystrokes(
    time: Res<Time>,
    tuning: Res<SessionTuning>,
    state: Res<State<GameState>>,
    owner: Res<InputOwner>,
    mut battle: ResMut<BattleState>,
    mut score: ResMut<ScoreManager>,
    mut keys: MessageReader<KeyboardInput>,
    mut sequence_changed: MessageWriter<SequenceChangedEvent>,
    mut player_attack: MessageWriter<PlayerAttackEvent>,
    mut hit_enemy: MessageWriter<HitEnemyEvent>,
) {
    // Runs in every state for the same buffer-draining reason as the
    // movement dispatch; only one of the two ever acts on a key event.
    if *state.get() != GameState::Playing || *owner != InputOwner::Battle || !battle.input_active {
        keys.clear();
        return;
    }
    let Some(enemy) = battle.enemy else {
        keys.clear();
        return;
    };

    let now = time.elapsed_secs_f64();

    for key in keys.read() {
        if battle.phase != BattlePhase::Active {
            break;
        }
        if key.state != ButtonState::Pressed {
            continue;
        }
        let Some(typed) = key_symbol(&key.logical_key) else {
            continue;
        };
        if battle.in_debounce(now, tuning.input_debounce) {
            continue;
        }
        let Some(expected) = battle.sequence.expected() else {
            continue;
        };
        battle.note_keystroke(now);

        if expected.accepts(typed) {
            score.record_correct(now, ScoreContext::Battle);
            player_attack.write(PlayerAttackEvent);
            hit_enemy.write(HitEnemyEvent { entity: enemy });
            battle.sequence.advance();
            sequence_changed.write(SequenceChangedEvent {
                kind: SequenceKind::Battle,
            });
            if battle.sequence.is_complete() {
                battle.phase = BattlePhase::Resolving;
                battle.victory = true;
                battle.input_active = false;
            }
        } else {
            score.record_incorrect(now, ScoreContext::Battle);
        }
    }
}

/// The repeating attack countdown. Expiry means the enemy attacks and the
/// player takes a hit; the duel continues with a fresh countdown.
pub(crate) fn tick_countdown(
    time: Res<Time>,
    mut battle: ResMut<BattleState>,
    mut rng: ResMut<SessionRng>,
    mut enemy_query: Query<&mut AnimationController, (With<Enemy>, Without<EnemyDying>)>,
    mut enemy_attack: MessageWriter<EnemyAttackEvent>,
    mut damage_player: MessageWriter<DamagePlayerEvent>,
) {
    use rand::Rng;

    if !battle.tick_countdown(time.delta_secs()) {
        return;
    }
    let Some(enemy) = battle.enemy else {
        return;
    };

    info!("Battle countdown expired, enemy attacks");
    if let Ok(mut anim) = enemy_query.get_mut(enemy) {
        let variant = AttackVariant::ALL[rng.0.random_range(0..AttackVariant::ALL.len())];
        anim.set_state(AnimState::Attack(variant));
    }
    enemy_attack.write(EnemyAttackEvent { enemy });
    damage_player.write(DamagePlayerEvent);
}

/// Apply the duel outcome and tear the battle down.
pub(crate) fn resolve_battle(
    mut battle: ResMut<BattleState>,
    mut owner: ResMut<InputOwner>,
    mut typing: ResMut<MovementTyping>,
    mut rng: ResMut<SessionRng>,
    mut camera_query: CameraTransform,
    mut damage_enemy: MessageWriter<DamageEnemyEvent>,
    mut phase_changed: MessageWriter<BattlePhaseChangedEvent>,
    mut sequence_changed: MessageWriter<SequenceChangedEvent>,
) {
    if battle.phase != BattlePhase::Resolving {
        return;
    }
    if battle.victory
        && let Some(enemy) = battle.enemy
    {
        info!("Battle won against {:?}", enemy);
        damage_enemy.write(DamageEnemyEvent { entity: enemy });
    }
    teardown(
        &mut battle,
        &mut owner,
        &mut typing,
        &mut rng,
        &mut camera_query,
        &mut phase_changed,
        &mut sequence_changed,
    );
}

/// Unconditional teardown, shared by resolution and forced cleanup.
/// A no-op while Idle; from any other phase it cancels the in-flight
/// timers, restores the camera, resets and regenerates the movement
/// sequence, and hands keyboard dispatch back to movement.
#[allow(clippy::too_many_arguments)]
pub(crate) fn teardown(
    battle: &mut BattleState,
    owner: &mut InputOwner,
    typing: &mut MovementTyping,
    rng: &mut SessionRng,
    camera_query: &mut CameraTransform,
    phase_changed: &mut MessageWriter<BattlePhaseChangedEvent>,
    sequence_changed: &mut MessageWriter<SequenceChangedEvent>,
) {
    if battle.is_idle() {
        return;
    }

    if let Some(scale) = battle.saved_camera_scale
        && let Ok(mut camera) = camera_query.single_mut()
    {
        camera.scale = Vec3::splat(scale);
    }

    battle.reset();

    typing.reset_sequence(&mut rng.0);
    typing.active = true;
    *owner = InputOwner::Movement;

    phase_changed.write(BattlePhaseChangedEvent {
        phase: BattlePhase::Idle,
    });
    sequence_changed.write(SequenceChangedEvent {
        kind: SequenceKind::Movement,
    });
}

/// Forced cleanup on leaving the level, idempotent with normal resolution.
pub(crate) fn cleanup_battle(
    mut battle: ResMut<BattleState>,
    mut owner: ResMut<InputOwner>,
    mut typing: ResMut<MovementTyping>,
    mut rng: ResMut<SessionRng>,
    mut camera_query: CameraTransform,
    mut phase_changed: MessageWriter<BattlePhaseChangedEvent>,
    mut sequence_changed: MessageWriter<SequenceChangedEvent>,
) {
    teardown(
        &mut battle,
        &mut owner,
        &mut typing,
        &mut rng,
        &mut camera_query,
        &mut phase_changed,
        &mut sequence_changed,
    );
}
