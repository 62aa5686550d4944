//! Content domain: designer tuning loaded from RON at startup.

mod data;
mod loader;

pub use data::{CameraDef, GravityDef, InputDef, MovementDef, PlayerTuningFile};
pub use loader::{load_tuning_file, ContentLoadError};

use bevy::prelude::*;
use std::path::Path;

use crate::camera::CameraTuning;
use crate::movement::{GravityTuning, InputTuning, MovementTuning};

const TUNING_PATH: &str = "assets/data/player.ron";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_player_tuning);
    }
}

/// Apply the RON tuning file onto the tuning resources. A missing or invalid
/// file keeps the compiled-in defaults; the movement core never sees a
/// partially applied file.
fn load_player_tuning(
    mut movement: ResMut<MovementTuning>,
    mut gravity: ResMut<GravityTuning>,
    mut input: ResMut<InputTuning>,
    mut camera: ResMut<CameraTuning>,
) {
    let file = match load_tuning_file(Path::new(TUNING_PATH)) {
        Ok(file) => file,
        Err(e) => {
            warn!("{}; using built-in defaults", e);
            return;
        }
    };

    movement.acceleration = file.movement.acceleration;
    movement.deceleration = file.movement.deceleration;
    movement.max_horizontal_speed = file.movement.max_horizontal_speed;
    movement.jump_speed = file.movement.jump_speed;
    movement.jump_abort_speed = file.movement.jump_abort_speed;

    gravity.gravity = file.gravity.gravity;
    gravity.grounded_gravity = file.gravity.grounded_gravity;
    gravity.max_fall_speed = file.gravity.max_fall_speed;

    input.dead_zone = file.input.dead_zone;

    camera.smooth_speed = file.camera.smooth_speed;
    camera.offset = Vec3::from_array(file.camera.offset);
    camera.look_depth = file.camera.look_depth;

    info!(
        "Loaded player tuning from {} (schema v{})",
        TUNING_PATH, file.schema_version
    );
}
