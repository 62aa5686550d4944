//! Movement domain: the deterministic speed model.
//!
//! Pure functions stepped once per frame by the movement systems. No engine
//! state is touched here, so the whole model can be driven at a fixed or
//! variable `dt` in tests.

use bevy::prelude::*;

use crate::movement::{GravityTuning, MotionState, MovementInput, MovementTuning};

/// Step `current` linearly toward `target` by at most `max_delta`, never
/// overshooting. A zero or negative `max_delta` leaves the value unchanged,
/// so degenerate tuning stalls the speed rather than failing.
pub fn move_toward(current: f32, target: f32, max_delta: f32) -> f32 {
    if max_delta <= 0.0 {
        return current;
    }
    let delta = target - current;
    if delta.abs() <= max_delta {
        target
    } else {
        current + max_delta * delta.signum()
    }
}

/// Advance horizontal speed toward the input-derived target and refresh the
/// travel direction.
///
/// The target speed comes from the *current* axis (zero once input is
/// released), while the direction falls back to the last held axis, so a
/// released character keeps sliding the way it was going while decelerating.
pub fn step_horizontal(
    state: &mut MotionState,
    input: &MovementInput,
    tuning: &MovementTuning,
    dt: f32,
) {
    let mut intent = Vec3::X * input.axis.x;
    if intent.length_squared() > 1.0 {
        intent = intent.normalize();
    }

    state.target_horizontal_speed = intent.length() * tuning.max_horizontal_speed;
    let rate = if input.has_move_input {
        tuning.acceleration
    } else {
        tuning.deceleration
    };
    state.horizontal_speed = move_toward(
        state.horizontal_speed,
        state.target_horizontal_speed,
        rate * dt,
    );

    let mut direction = if input.has_move_input {
        intent
    } else {
        Vec3::X * input.last_move_input.x
    };
    if direction.length_squared() > 1.0 {
        direction = direction.normalize();
    }
    state.move_direction = direction;
}

/// Advance vertical speed through the grounded/airborne state machine.
///
/// Grounded: a constant seating speed, replaced by `jump_speed` the frame
/// jump is held (grounded flips false in the same step). Airborne: when jump
/// is released mid-ascent the abort rate applies first, then the normal
/// gravity rate applies unconditionally. Both steps land on the same frame
/// and compound; that double application is the shipped jump feel and is
/// kept as-is.
pub fn step_vertical(
    state: &mut MotionState,
    jump_held: bool,
    tuning: &MovementTuning,
    gravity: &GravityTuning,
    dt: f32,
) {
    if state.on_ground {
        state.vertical_speed = -gravity.grounded_gravity;

        if jump_held {
            state.vertical_speed = tuning.jump_speed;
            state.on_ground = false;
        }
    } else {
        if !jump_held && state.vertical_speed > 0.0 {
            state.vertical_speed = move_toward(
                state.vertical_speed,
                -gravity.max_fall_speed,
                tuning.jump_abort_speed * dt,
            );
        }
        state.vertical_speed = move_toward(
            state.vertical_speed,
            -gravity.max_fall_speed,
            gravity.gravity * dt,
        );
    }
}

/// Compose the per-frame world-space velocity handed to the physics mover.
pub fn compose_velocity(state: &MotionState) -> Vec3 {
    state.horizontal_speed * state.move_direction + state.vertical_speed * Vec3::Y
}

/// Facing orientation for the given horizontal velocity component: yaw 180
/// when moving toward -X, yaw 0 toward +X, `None` when exactly neutral.
pub fn facing_target(horizontal_velocity_x: f32) -> Option<Quat> {
    if horizontal_velocity_x < 0.0 {
        Some(Quat::from_rotation_y(std::f32::consts::PI))
    } else if horizontal_velocity_x > 0.0 {
        Some(Quat::IDENTITY)
    } else {
        None
    }
}
