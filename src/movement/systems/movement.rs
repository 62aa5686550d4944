//! Movement domain: per-frame speed stepping and motion integration.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::speed;
use crate::movement::{GravityTuning, MotionState, MovementInput, MovementTuning, Player};

/// Step the speed model and hand the composed velocity to the physics mover.
/// Collision resolution and the resulting displacement belong to avian; this
/// system only decides how fast the character wants to move.
pub(crate) fn apply_movement(
    time: Res<Time>,
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    gravity: Res<GravityTuning>,
    mut query: Query<(&mut MotionState, &mut LinearVelocity), With<Player>>,
) {
    let dt = time.delta_secs();

    for (mut state, mut velocity) in &mut query {
        speed::step_horizontal(&mut state, &input, &tuning, dt);
        speed::step_vertical(&mut state, input.jump_held, &tuning, &gravity, dt);

        velocity.0 = speed::compose_velocity(&state);
    }
}

/// Ease the character's yaw toward the direction of horizontal travel.
/// First-order blend at a fixed rate; neutral motion leaves facing alone.
pub(crate) fn update_facing(
    time: Res<Time>,
    mut query: Query<(&MotionState, &mut Transform), With<Player>>,
) {
    let dt = time.delta_secs();

    for (state, mut transform) in &mut query {
        let vx = state.horizontal_speed * state.move_direction.x;
        if let Some(target) = speed::facing_target(vx) {
            let t = (10.0 * dt).min(1.0);
            transform.rotation = transform.rotation.slerp(target, t);
        }
    }
}
