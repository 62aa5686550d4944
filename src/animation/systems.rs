//! Animation domain: parameter forwarding, state selection, and IK copy.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::animation::{select_state, AnimationController, AnimatorParams, IkEffector, IkTargets};
use crate::movement::{MotionState, MovementTuning, Player};

/// Linearly remap `value` from `[from_min, from_max]` to `[to_min, to_max]`.
/// A collapsed source range maps everything to `to_min`.
pub fn remap(value: f32, from_min: f32, from_max: f32, to_min: f32, to_max: f32) -> f32 {
    let from_span = from_max - from_min;
    if from_span.abs() <= f32::EPSILON {
        return to_min;
    }
    to_min + (value - from_min) * (to_max - to_min) / from_span
}

/// Build animator parameters from the mover's resolved velocity.
pub(crate) fn params_from_velocity(
    velocity: Vec3,
    grounded: bool,
    tuning: &MovementTuning,
) -> AnimatorParams {
    let planar = velocity.with_y(0.0);
    AnimatorParams {
        horizontal_speed: if tuning.max_horizontal_speed > 0.0 {
            planar.length() / tuning.max_horizontal_speed
        } else {
            0.0
        },
        vertical_speed: remap(velocity.y, -tuning.jump_speed, tuning.jump_speed, -1.0, 1.0),
        grounded,
    }
}

/// Forward normalized speeds and the grounded flag to the animation layer.
///
/// Runs before the locomotion chain, so `LinearVelocity` still holds the
/// solver's resolved result from the last physics step rather than the
/// commanded velocity. A character seated on the ground or pushed against a
/// wall animates from what it actually moved, not what it asked for.
pub(crate) fn update_animator_params(
    tuning: Res<MovementTuning>,
    mut query: Query<(&MotionState, &LinearVelocity, &mut AnimatorParams), With<Player>>,
) {
    for (state, velocity, mut params) in &mut query {
        *params = params_from_velocity(velocity.0, state.on_ground, &tuning);
    }
}

/// Drive the playback state from the animator parameters.
pub(crate) fn drive_animation_state(
    mut query: Query<(&AnimatorParams, &mut AnimationController)>,
) {
    for (params, mut controller) in &mut query {
        controller.set_state(select_state(params));
    }
}

/// Advance animation frames based on time.
pub(crate) fn update_animation_frames(
    time: Res<Time>,
    mut query: Query<&mut AnimationController>,
) {
    for mut controller in &mut query {
        controller.advance(time.delta_secs());
    }
}

/// Copy each bound target's pose onto the matching effector at full weight.
/// Unbound goals are skipped entirely; there is no partial weighting.
pub(crate) fn apply_ik_targets(
    rigs: Query<&IkTargets, With<Player>>,
    targets: Query<&GlobalTransform>,
    mut effectors: Query<(&IkEffector, &mut Transform), Without<Player>>,
) {
    for rig in &rigs {
        for (effector, mut transform) in &mut effectors {
            let Some(target) = rig.target_for(effector.0) else {
                continue;
            };
            let Ok(pose) = targets.get(target) else {
                continue;
            };

            let pose = pose.compute_transform();
            transform.translation = pose.translation;
            transform.rotation = pose.rotation;
        }
    }
}

/// Draw markers at every bound IK target.
#[cfg(feature = "dev-tools")]
pub(crate) fn draw_ik_target_gizmos(
    mut gizmos: Gizmos,
    rigs: Query<&IkTargets>,
    targets: Query<&GlobalTransform>,
) {
    for rig in &rigs {
        for target in rig.iter_bound() {
            if let Ok(pose) = targets.get(target) {
                gizmos.sphere(pose.translation(), 0.1, Color::srgb(0.9, 0.8, 0.2));
            }
        }
    }
}
