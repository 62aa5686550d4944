//! Movement domain: input sampling, the speed model, and motion integration.

mod bootstrap;
mod components;
mod dev;
mod resources;
pub mod speed;
mod systems;

pub use components::{GameLayer, Ground, MotionState, Player};
pub use resources::{GravityTuning, InputTuning, MovementInput, MovementTuning};

use bevy::prelude::*;

/// Set containing the per-frame locomotion chain; downstream consumers
/// (animation, camera) order themselves after it.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LocomotionSet;

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<GravityTuning>()
            .init_resource::<InputTuning>()
            .init_resource::<MovementInput>()
            .add_systems(Startup, (bootstrap::spawn_player, dev::spawn_test_room))
            .add_systems(
                Update,
                (
                    systems::sample_input,
                    systems::detect_ground,
                    systems::apply_movement,
                    systems::update_facing,
                )
                    .chain()
                    .in_set(LocomotionSet),
            );
    }
}
