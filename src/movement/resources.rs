//! Movement domain: tuning and input resources.

use bevy::prelude::*;

/// Horizontal and jump tuning, in meters/second (rates in meters/second^2).
#[derive(Resource, Debug, Clone)]
pub struct MovementTuning {
    pub acceleration: f32,
    pub deceleration: f32,
    pub max_horizontal_speed: f32,
    pub jump_speed: f32,
    /// Extra downward rate applied while ascending with jump released.
    /// This is what makes holding jump rise higher than tapping it.
    pub jump_abort_speed: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            acceleration: 25.0,
            deceleration: 25.0,
            max_horizontal_speed: 8.0,
            jump_speed: 10.0,
            jump_abort_speed: 10.0,
        }
    }
}

#[derive(Resource, Debug, Clone)]
pub struct GravityTuning {
    /// Downward rate while airborne.
    pub gravity: f32,
    /// Constant downward speed while grounded, keeps the collider seated.
    pub grounded_gravity: f32,
    /// Fall speed is stepped toward this bound, never past it.
    pub max_fall_speed: f32,
}

impl Default for GravityTuning {
    fn default() -> Self {
        Self {
            gravity: 20.0,
            grounded_gravity: 5.0,
            max_fall_speed: 40.0,
        }
    }
}

#[derive(Resource, Debug, Clone)]
pub struct InputTuning {
    /// Raw axis magnitude below this is treated as no input.
    pub dead_zone: f32,
}

impl Default for InputTuning {
    fn default() -> Self {
        Self { dead_zone: 0.2 }
    }
}

/// Sampled move intent for the current frame.
///
/// `last_move_input` holds the axis from the final frame that had input and
/// only updates on the held -> released transition, so facing and travel
/// direction survive neutral input.
#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    pub axis: Vec2,
    pub has_move_input: bool,
    pub last_move_input: Vec2,
    pub jump_held: bool,
}
