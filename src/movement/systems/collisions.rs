//! Movement domain: ground detection feeding the speed model.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, MotionState, Player};

pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    mut query: Query<(&Transform, &Collider, &mut MotionState), With<Player>>,
) {
    // Filter to only hit Ground layer entities
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);

    for (transform, collider, mut state) in &mut query {
        let was_on_ground = state.on_ground;

        // Cast a short ray downward from the character's feet
        let half_height = match collider.shape_scaled().as_capsule() {
            Some(c) => c.half_height() + c.radius,
            None => 0.9,
        };

        let ray_origin = transform.translation - Vec3::Y * half_height;
        let ray_distance = 0.1;

        let hit = spatial_query.cast_ray(
            ray_origin,
            Dir3::NEG_Y,
            ray_distance,
            true,
            &ground_filter,
        );

        // An ascending character is never grounded, even if the ray still
        // clips the surface it just left.
        state.on_ground = hit.is_some() && state.vertical_speed <= 0.0;

        if state.on_ground && !was_on_ground {
            debug!("Landed: vertical_speed={}", state.vertical_speed);
        } else if !state.on_ground && was_on_ground {
            debug!("Left ground: vertical_speed={}", state.vertical_speed);
        }
    }
}
