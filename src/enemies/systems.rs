//! Enemies domain: patrol updates, hit reactions, and the death sequence.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::anim::{AnimState, AnimationController};
use crate::core::SessionTuning;
use crate::enemies::components::{Enemy, EnemyDying, HitReacting, Patrol, PatrolPhase};
use crate::enemies::events::{DamageEnemyEvent, EnemyDiedEvent, HitEnemyEvent};

/// Patrol state machine: walk to a patrol end, pause there, reverse.
/// Held enemies keep zero horizontal velocity until teardown or death.
pub(crate) fn update_patrol(
    time: Res<Time>,
    mut query: Query<
        (
            &Transform,
            &mut Patrol,
            &mut LinearVelocity,
            &mut AnimationController,
            &mut Sprite,
        ),
        (With<Enemy>, Without<EnemyDying>),
    >,
) {
    let dt = time.delta_secs();

    for (transform, mut patrol, mut velocity, mut anim, mut sprite) in &mut query {
        velocity.x = patrol.step(transform.translation.x, dt);

        if !anim.holds_transient() {
            anim.set_state(match patrol.phase {
                PatrolPhase::Walking => AnimState::Walk,
                PatrolPhase::Pausing | PatrolPhase::Held => AnimState::Idle,
            });
        }

        sprite.flip_x = patrol.direction < 0.0;
    }
}

/// Transient hit reaction; ignored on dying enemies.
pub(crate) fn handle_hit_enemy(
    mut commands: Commands,
    tuning: Res<SessionTuning>,
    mut events: MessageReader<HitEnemyEvent>,
    mut query: Query<&mut AnimationController, (With<Enemy>, Without<EnemyDying>)>,
) {
    for event in events.read() {
        let Ok(mut anim) = query.get_mut(event.entity) else {
            continue;
        };
        anim.set_state(AnimState::Hurt);
        commands.entity(event.entity).insert(HitReacting {
            timer: tuning.enemy_hit_reaction,
        });
    }
}

/// Return to idle a fixed delay after a hit reaction.
pub(crate) fn tick_hit_reaction(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<
        (Entity, &mut HitReacting, &mut AnimationController),
        (With<Enemy>, Without<EnemyDying>),
    >,
) {
    let dt = time.delta_secs();

    for (entity, mut reacting, mut anim) in &mut query {
        reacting.timer -= dt;
        if reacting.timer <= 0.0 {
            commands.entity(entity).remove::<HitReacting>();
            anim.set_state(AnimState::Idle);
        }
    }
}

/// Terminal damage: knockback up, death cue, despawn countdown. A second
/// call for the same enemy is a no-op.
pub(crate) fn handle_damage_enemy(
    mut commands: Commands,
    tuning: Res<SessionTuning>,
    mut events: MessageReader<DamageEnemyEvent>,
    mut query: Query<
        (&mut LinearVelocity, &mut AnimationController),
        (With<Enemy>, Without<EnemyDying>),
    >,
    mut died: MessageWriter<EnemyDiedEvent>,
) {
    for event in events.read() {
        let Ok((mut velocity, mut anim)) = query.get_mut(event.entity) else {
            continue;
        };
        velocity.x = 0.0;
        velocity.y = tuning.enemy_knockback;
        anim.set_state(AnimState::Death);
        commands.entity(event.entity).insert(EnemyDying {
            timer: tuning.enemy_despawn_delay,
            total: tuning.enemy_despawn_delay,
        });
        commands
            .entity(event.entity)
            .remove::<HitReacting>();
        died.write(EnemyDiedEvent {
            entity: event.entity,
        });
    }
}

/// Fade and rotate the defeated enemy, then destroy it.
pub(crate) fn tick_dying(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut EnemyDying, &mut Sprite, &mut Transform), With<Enemy>>,
) {
    let dt = time.delta_secs();

    for (entity, mut dying, mut sprite, mut transform) in &mut query {
        dying.timer -= dt;
        if dying.timer <= 0.0 {
            commands.entity(entity).despawn();
            continue;
        }
        let fraction = (dying.timer / dying.total).clamp(0.0, 1.0);
        sprite.color.set_alpha(fraction);
        transform.rotation = Quat::from_rotation_z((1.0 - fraction) * 0.8);
    }
}

