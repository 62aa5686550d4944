//! Movement domain: player components and physics layers.

use avian3d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

/// Per-character speed state, stepped once per frame by the speed model.
///
/// `horizontal_speed` only ever moves toward `target_horizontal_speed` by
/// `rate * dt`; `vertical_speed` approaches `-max_fall_speed` the same way
/// while airborne. `on_ground` is fed back from the previous frame's ground
/// probe, except on the jump frame where it flips false immediately.
#[derive(Component, Debug, Default)]
pub struct MotionState {
    pub horizontal_speed: f32,
    pub target_horizontal_speed: f32,
    pub vertical_speed: f32,
    pub on_ground: bool,
    /// Unit direction of horizontal travel, or zero before any input.
    pub move_direction: Vec3,
}

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;
