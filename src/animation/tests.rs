//! Animation domain: unit tests for parameter remapping and state selection.

use super::{
    remap, select_state, AnimationController, AnimationState, AnimatorParams, IkGoal, IkTargets,
    RUN_THRESHOLD,
};

#[test]
fn test_vertical_remap_endpoints() {
    let jump_speed = 10.0;
    assert_eq!(remap(0.0, -jump_speed, jump_speed, -1.0, 1.0), 0.0);
    assert_eq!(remap(jump_speed, -jump_speed, jump_speed, -1.0, 1.0), 1.0);
    assert_eq!(remap(-jump_speed, -jump_speed, jump_speed, -1.0, 1.0), -1.0);
}

#[test]
fn test_remap_collapsed_range() {
    assert_eq!(remap(3.0, 5.0, 5.0, -1.0, 1.0), -1.0);
}

#[test]
fn test_state_selection() {
    let grounded_idle = AnimatorParams {
        horizontal_speed: 0.0,
        vertical_speed: 0.0,
        grounded: true,
    };
    assert_eq!(select_state(&grounded_idle), AnimationState::Idle);

    let grounded_running = AnimatorParams {
        horizontal_speed: RUN_THRESHOLD + 0.1,
        grounded: true,
        ..grounded_idle
    };
    assert_eq!(select_state(&grounded_running), AnimationState::Run);

    let ascending = AnimatorParams {
        horizontal_speed: 0.0,
        vertical_speed: 0.5,
        grounded: false,
    };
    assert_eq!(select_state(&ascending), AnimationState::Jump);

    let descending = AnimatorParams {
        vertical_speed: -0.5,
        ..ascending
    };
    assert_eq!(select_state(&descending), AnimationState::Fall);
}

#[test]
fn test_params_built_from_resolved_velocity() {
    use bevy::prelude::Vec3;

    use super::systems::params_from_velocity;
    use crate::movement::MovementTuning;

    let tuning = MovementTuning::default();

    // Seated on the ground the solver cancels the commanded seating speed;
    // the animator sees the resolved zero, not -grounded_gravity.
    let seated = params_from_velocity(Vec3::ZERO, true, &tuning);
    assert_eq!(seated.vertical_speed, 0.0);
    assert_eq!(seated.horizontal_speed, 0.0);
    assert!(seated.grounded);

    // Pushed against a wall: commanded full run speed, resolved zero planar.
    let blocked = params_from_velocity(Vec3::new(0.0, -0.5, 0.0), true, &tuning);
    assert_eq!(blocked.horizontal_speed, 0.0);

    // Free motion passes straight through.
    let falling = params_from_velocity(Vec3::new(4.0, -10.0, 0.0), false, &tuning);
    assert_eq!(falling.horizontal_speed, 0.5);
    assert_eq!(falling.vertical_speed, -1.0);
    assert!(!falling.grounded);
}

#[test]
fn test_frame_stepping_loops_and_holds() {
    let mut controller = AnimationController::default();

    // Looping state wraps back to frame zero
    controller.set_state(AnimationState::Run);
    assert!(controller.looping);
    for expected in 1..controller.total_frames {
        controller.advance(0.2);
        assert_eq!(controller.current_frame, expected);
    }
    controller.advance(0.2);
    assert_eq!(controller.current_frame, 0);
    controller.advance(0.2);
    assert_eq!(controller.current_frame, 1);

    // Sub-frame time accumulates instead of stepping
    controller.set_state(AnimationState::Idle);
    controller.advance(0.05);
    assert_eq!(controller.current_frame, 0);

    // Non-looping state holds its final frame
    controller.set_state(AnimationState::Fall);
    assert!(!controller.looping);
    controller.advance(0.2);
    assert_eq!(controller.current_frame, 1);
    controller.advance(0.2);
    assert_eq!(controller.current_frame, 1);
    controller.advance(0.2);
    assert_eq!(controller.current_frame, 1);
}

#[test]
fn test_controller_resets_on_state_change() {
    let mut controller = AnimationController {
        current_frame: 3,
        frame_timer: 0.1,
        ..Default::default()
    };

    controller.set_state(AnimationState::Fall);
    assert_eq!(controller.state, AnimationState::Fall);
    assert_eq!(controller.previous_state, AnimationState::Idle);
    assert_eq!(controller.current_frame, 0);
    assert_eq!(controller.frame_timer, 0.0);
    assert!(!controller.looping);

    // Re-setting the same state keeps frame progress
    controller.current_frame = 1;
    controller.set_state(AnimationState::Fall);
    assert_eq!(controller.current_frame, 1);
}

#[test]
fn test_ik_target_lookup() {
    use bevy::prelude::World;

    let mut world = World::new();
    let hand = world.spawn_empty().id();
    let foot = world.spawn_empty().id();
    let targets = IkTargets {
        right_hand: Some(hand),
        left_foot: Some(foot),
        ..Default::default()
    };

    assert_eq!(targets.target_for(IkGoal::RightHand), Some(hand));
    assert_eq!(targets.target_for(IkGoal::LeftFoot), Some(foot));
    assert_eq!(targets.target_for(IkGoal::LeftHand), None);
    assert_eq!(targets.target_for(IkGoal::RightFoot), None);

    let bound: Vec<_> = targets.iter_bound().collect();
    assert_eq!(bound, vec![hand, foot]);
}
