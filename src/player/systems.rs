//! Player domain: locomotion, damage, and attack state machines.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::anim::{AnimState, AnimationController, AnimationFinished, AttackVariant};
use crate::core::{ReturnToMapEvent, SessionRng, SessionTuning};
use crate::player::components::{
    ActiveHitbox, AttackControl, AutoJumpState, Gait, GameLayer, HitboxClass, HurtState, Lives,
    Locomotion, MovementStatus, Player, PlayerDying, VerticalState, gait_for,
};
use crate::player::events::{
    AutoJumpEvent, DamagePlayerEvent, PlayerAttackEvent, PlayerDamagedEvent, PlayerDiedEvent,
};
use crate::typing::AdvanceEvent;
use rand::Rng;

/// Extend the travel target for each authorized advance. A command landing
/// while airborne only raises horizontal speed, never lowers it, so it
/// cannot slow a jump already in flight.
pub(crate) fn apply_advance(
    tuning: Res<SessionTuning>,
    mut advances: MessageReader<AdvanceEvent>,
    mut query: Query<
        (&mut Locomotion, &MovementStatus, &mut LinearVelocity),
        (With<Player>, Without<PlayerDying>),
    >,
) {
    let Ok((mut locomotion, status, mut velocity)) = query.single_mut() else {
        advances.clear();
        return;
    };

    for advance in advances.read() {
        locomotion.target_x += advance.distance;
        locomotion.moving = true;
        if !status.on_ground && velocity.x < tuning.air_speed {
            velocity.x = tuning.air_speed;
        }
    }
}

/// Ground contact via a short downward ray from the avatar's feet.
pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    mut query: Query<(&Transform, &Collider, &mut MovementStatus), With<Player>>,
) {
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);

    for (transform, collider, mut status) in &mut query {
        let half_height = match collider.shape_scaled().as_cuboid() {
            Some(cuboid) => cuboid.half_extents.y,
            None => 24.0,
        };

        let ray_origin = transform.translation.truncate() - Vec2::new(0.0, half_height);
        let hit = spatial_query.cast_ray(ray_origin, Dir2::NEG_Y, 4.0, true, &ground_filter);

        status.on_ground = hit.is_some();
    }
}

/// Per-frame locomotion update: walk vs run by remaining distance while
/// grounded, rising vs falling by vertical velocity while airborne. Each
/// animation is entered once per state entry; transient clips (attack,
/// hurt, death) are never overridden mid-play.
pub(crate) fn update_locomotion(
    tuning: Res<SessionTuning>,
    mut query: Query<
        (
            &Transform,
            &mut Locomotion,
            &mut MovementStatus,
            &mut LinearVelocity,
            &mut AnimationController,
        ),
        (With<Player>, Without<PlayerDying>),
    >,
) {
    for (transform, mut locomotion, mut status, mut velocity, mut anim) in &mut query {
        if status.on_ground {
            status.vertical = VerticalState::Grounded;
            let remaining = locomotion.remaining(transform.translation.x);

            match gait_for(remaining, tuning.run_threshold) {
                Gait::Idle => {
                    locomotion.moving = false;
                    locomotion.running = false;
                    velocity.x = 0.0;
                    if !anim.holds_transient() {
                        anim.set_state(AnimState::Idle);
                    }
                }
                gait => {
                    locomotion.moving = true;
                    locomotion.running = gait == Gait::Run;
                    velocity.x = if locomotion.running {
                        tuning.run_speed
                    } else {
                        tuning.walk_speed
                    };
                    if !anim.holds_transient() {
                        anim.set_state(if locomotion.running {
                            AnimState::Run
                        } else {
                            AnimState::Walk
                        });
                    }
                }
            }
        } else {
            status.vertical = if velocity.y > 0.0 {
                VerticalState::Rising
            } else {
                VerticalState::Falling
            };
            if !anim.holds_transient() {
                // set_state is a no-op on re-entry, so the clip plays once
                // per rise or fall, not once per frame.
                anim.set_state(match status.vertical {
                    VerticalState::Rising => AnimState::Jump,
                    _ => AnimState::Fall,
                });
            }
        }
    }
}

/// Swap the collider when the state class changes. Grounded locomotion and
/// airborne states deliberately use different boxes.
pub(crate) fn update_hitbox(
    mut query: Query<(&MovementStatus, &mut ActiveHitbox, &mut Collider), With<Player>>,
) {
    for (status, mut active, mut collider) in &mut query {
        let class = if status.on_ground {
            HitboxClass::Grounded
        } else {
            HitboxClass::Air
        };
        if active.0 != class {
            active.0 = class;
            let size = class.size();
            *collider = Collider::rectangle(size.x, size.y);
        }
    }
}

/// Auto-jump on zone intersection: fixed up-and-forward impulse, target
/// extended only forward, guarded by a cooldown against re-triggering.
pub(crate) fn handle_auto_jump(
    tuning: Res<SessionTuning>,
    mut events: MessageReader<AutoJumpEvent>,
    mut query: Query<
        (
            &Transform,
            &mut Locomotion,
            &mut AutoJumpState,
            &mut LinearVelocity,
            &mut AnimationController,
        ),
        (With<Player>, Without<PlayerDying>),
    >,
) {
    let Ok((transform, mut locomotion, mut auto_jump, mut velocity, mut anim)) =
        query.single_mut()
    else {
        events.clear();
        return;
    };

    for _ in events.read() {
        if auto_jump.cooldown > 0.0 {
            continue;
        }
        auto_jump.cooldown = tuning.auto_jump_cooldown;
        velocity.y = tuning.auto_jump_impulse.y;
        velocity.x = velocity.x.max(tuning.auto_jump_impulse.x);

        let implied_target = transform.translation.x + tuning.auto_jump_reach;
        if implied_target > locomotion.target_x {
            locomotion.target_x = implied_target;
        }
        if !anim.holds_transient() {
            anim.set_state(AnimState::Jump);
        }
    }
}

/// Apply incoming hits: ignored inside the hurt window, lives floor at
/// zero, death starts the terminal countdown.
pub(crate) fn handle_player_damage(
    mut commands: Commands,
    tuning: Res<SessionTuning>,
    mut events: MessageReader<DamagePlayerEvent>,
    mut query: Query<
        (
            Entity,
            &mut Lives,
            &mut HurtState,
            &mut LinearVelocity,
            &mut AnimationController,
        ),
        (With<Player>, Without<PlayerDying>),
    >,
    mut damaged: MessageWriter<PlayerDamagedEvent>,
    mut died: MessageWriter<PlayerDiedEvent>,
) {
    let Ok((entity, mut lives, mut hurt, mut velocity, mut anim)) = query.single_mut() else {
        events.clear();
        return;
    };

    for _ in events.read() {
        if hurt.is_hurt() {
            continue;
        }
        lives.remaining = lives.remaining.saturating_sub(1);
        hurt.timer = tuning.hurt_duration;
        damaged.write(PlayerDamagedEvent {
            lives_remaining: lives.remaining,
        });

        if lives.remaining == 0 {
            info!("Player died");
            velocity.x = 0.0;
            anim.set_state(AnimState::Death);
            commands.entity(entity).insert(PlayerDying {
                timer: tuning.death_delay,
            });
            died.write(PlayerDiedEvent);
        } else {
            anim.set_state(AnimState::Hurt);
        }
    }
}

/// Play a random attack variant; refused while one is already in flight.
pub(crate) fn handle_player_attack(
    mut events: MessageReader<PlayerAttackEvent>,
    mut rng: ResMut<SessionRng>,
    mut query: Query<
        (&mut AttackControl, &mut AnimationController),
        (With<Player>, Without<PlayerDying>),
    >,
) {
    let Ok((mut attack, mut anim)) = query.single_mut() else {
        events.clear();
        return;
    };

    for _ in events.read() {
        if attack.active.is_some() {
            continue;
        }
        let variant = AttackVariant::ALL[rng.0.random_range(0..AttackVariant::ALL.len())];
        attack.active = Some(variant);
        anim.set_state(AnimState::Attack(variant));
    }
}

/// Clear the attack-in-flight flag when the active variant's clip (and
/// only that variant's clip) reports completion.
pub(crate) fn clear_finished_attack(
    mut finished: MessageReader<AnimationFinished>,
    mut query: Query<(Entity, &mut AttackControl), With<Player>>,
) {
    let Ok((player, mut attack)) = query.single_mut() else {
        finished.clear();
        return;
    };

    for message in finished.read() {
        if message.entity != player {
            continue;
        }
        if let AnimState::Attack(variant) = message.state
            && attack.active == Some(variant)
        {
            attack.active = None;
        }
    }
}

/// Frame-ticked cooldowns and the death countdown.
pub(crate) fn tick_player_timers(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<
        (
            Entity,
            &mut HurtState,
            &mut AutoJumpState,
            Option<&mut PlayerDying>,
        ),
        With<Player>,
    >,
    mut return_to_map: MessageWriter<ReturnToMapEvent>,
) {
    let dt = time.delta_secs();

    for (entity, mut hurt, mut auto_jump, dying) in &mut query {
        if hurt.timer > 0.0 {
            hurt.timer = (hurt.timer - dt).max(0.0);
        }
        if auto_jump.cooldown > 0.0 {
            auto_jump.cooldown = (auto_jump.cooldown - dt).max(0.0);
        }
        if let Some(mut dying) = dying {
            dying.timer -= dt;
            if dying.timer <= 0.0 {
                commands.entity(entity).remove::<PlayerDying>();
                return_to_map.write(ReturnToMapEvent);
            }
        }
    }
}

/// Damage cue: tint the sprite red while the hurt window is open.
pub(crate) fn apply_hurt_tint(
    mut query: Query<(&HurtState, &mut Sprite), With<Player>>,
) {
    for (hurt, mut sprite) in &mut query {
        sprite.color = if hurt.is_hurt() {
            Color::srgb(0.95, 0.35, 0.35)
        } else {
            Color::srgb(0.9, 0.9, 0.85)
        };
    }
}
