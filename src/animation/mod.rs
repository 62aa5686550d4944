//! Animation domain: animator parameter forwarding and IK target binding.

mod components;
mod systems;
#[cfg(test)]
mod tests;

pub use components::{
    select_state, AnimationController, AnimationState, AnimatorParams, IkEffector, IkGoal,
    IkTargets, RUN_THRESHOLD,
};
pub use systems::remap;

use bevy::prelude::*;

pub struct AnimationPlugin;

impl Plugin for AnimationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                systems::update_animator_params,
                systems::drive_animation_state,
                systems::update_animation_frames,
                systems::apply_ik_targets,
            )
                .chain()
                // The locomotion chain overwrites LinearVelocity with the
                // commanded velocity; sampling first reads the previous
                // physics step's solver-resolved velocity instead.
                .before(crate::movement::LocomotionSet),
        );

        #[cfg(feature = "dev-tools")]
        app.add_systems(Update, systems::draw_ik_target_gizmos);
    }
}
