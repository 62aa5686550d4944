//! Movement domain: input sampling for locomotion.

use bevy::prelude::*;

use crate::movement::{InputTuning, MovementInput};

pub(crate) fn sample_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    tuning: Res<InputTuning>,
    mut input: ResMut<MovementInput>,
) {
    // Horizontal axis
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    let jump_held = keyboard.pressed(KeyCode::Space) || keyboard.pressed(KeyCode::KeyK);

    sample(&mut input, x, jump_held, tuning.dead_zone);
}

/// Apply one frame of raw device state to the sampled input.
///
/// The last held axis is captured on the held -> released transition, before
/// the new zero value overwrites it.
pub(crate) fn sample(input: &mut MovementInput, raw_axis: f32, jump_held: bool, dead_zone: f32) {
    let mut axis = Vec2::new(raw_axis, 0.0);
    if axis.x.abs() < dead_zone {
        axis.x = 0.0;
    }

    let has_move_input = axis.length_squared() > 0.0;

    if input.has_move_input && !has_move_input {
        input.last_move_input = input.axis;
    }

    input.axis = axis;
    input.has_move_input = has_move_input;
    input.jump_held = jump_held;
}
