//! Data definitions for the player tuning RON file.
//!
//! These structs mirror the structure in assets/data/player.ron and are used
//! for deserialization; startup applies them onto the tuning resources.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlayerTuningFile {
    pub schema_version: u32,
    pub movement: MovementDef,
    pub gravity: GravityDef,
    pub input: InputDef,
    pub camera: CameraDef,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MovementDef {
    pub acceleration: f32,
    pub deceleration: f32,
    pub max_horizontal_speed: f32,
    pub jump_speed: f32,
    pub jump_abort_speed: f32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GravityDef {
    pub gravity: f32,
    pub grounded_gravity: f32,
    pub max_fall_speed: f32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InputDef {
    pub dead_zone: f32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CameraDef {
    pub smooth_speed: f32,
    pub offset: [f32; 3],
    pub look_depth: f32,
}
