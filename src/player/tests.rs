//! Player domain: tests for gait selection and the hitbox contract.

use super::components::{Gait, HitboxClass, HurtState, Locomotion, gait_for};

#[test]
fn test_gait_idle_when_target_reached() {
    assert_eq!(gait_for(0.0, 160.0), Gait::Idle);
    assert_eq!(gait_for(-5.0, 160.0), Gait::Idle);
}

#[test]
fn test_gait_walks_below_run_threshold() {
    assert_eq!(gait_for(10.0, 160.0), Gait::Walk);
    assert_eq!(gait_for(160.0, 160.0), Gait::Walk);
}

#[test]
fn test_gait_runs_above_run_threshold() {
    assert_eq!(gait_for(160.1, 160.0), Gait::Run);
    assert_eq!(gait_for(1000.0, 160.0), Gait::Run);
}

#[test]
fn test_locomotion_remaining() {
    let locomotion = Locomotion {
        target_x: 300.0,
        moving: true,
        running: false,
    };
    assert_eq!(locomotion.remaining(100.0), 200.0);
    assert_eq!(locomotion.remaining(300.0), 0.0);
    assert_eq!(locomotion.remaining(350.0), -50.0);
}

#[test]
fn test_airborne_hitbox_is_narrower() {
    let grounded = HitboxClass::Grounded.size();
    let air = HitboxClass::Air.size();
    assert!(air.x < grounded.x);
    assert_ne!(grounded, air);
}

#[test]
fn test_hurt_state_window() {
    let mut hurt = HurtState::default();
    assert!(!hurt.is_hurt());
    hurt.timer = 0.3;
    assert!(hurt.is_hurt());
    hurt.timer = 0.0;
    assert!(!hurt.is_hurt());
}
