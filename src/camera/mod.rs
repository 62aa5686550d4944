//! Camera domain: smoothed follow camera for the player.

use bevy::prelude::*;

use crate::movement::{LocomotionSet, Player};

/// Follow tuning. The camera tracks only the target's x (plus offset) and
/// keeps its own height and depth, looking at the target against a fixed
/// scene depth.
#[derive(Resource, Debug, Clone)]
pub struct CameraTuning {
    pub smooth_speed: f32,
    pub offset: Vec3,
    pub look_depth: f32,
}

impl Default for CameraTuning {
    fn default() -> Self {
        Self {
            smooth_speed: 5.0,
            // Offset is added to a point that already carries the camera's
            // own y/z, so any nonzero y or z here becomes a constant drift.
            offset: Vec3::ZERO,
            look_depth: 10.0,
        }
    }
}

#[derive(Component, Debug)]
pub struct FollowCamera;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraTuning>()
            .add_systems(Startup, setup_camera)
            .add_systems(Update, follow_target.after(LocomotionSet));
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn((
        FollowCamera,
        Camera3d::default(),
        Transform::from_xyz(0.0, 2.0, -10.0).looking_at(Vec3::new(0.0, 1.0, 0.0), Vec3::Y),
    ));
}

fn follow_target(
    time: Res<Time>,
    tuning: Res<CameraTuning>,
    player: Query<&Transform, (With<Player>, Without<FollowCamera>)>,
    mut cameras: Query<&mut Transform, With<FollowCamera>>,
) {
    let Ok(target) = player.single() else {
        return;
    };
    let dt = time.delta_secs();

    for mut camera in &mut cameras {
        camera.look_at(
            Vec3::new(
                target.translation.x,
                target.translation.y,
                tuning.look_depth,
            ),
            Vec3::Y,
        );

        let desired = Vec3::new(
            target.translation.x,
            camera.translation.y,
            camera.translation.z,
        ) + tuning.offset;
        let t = (tuning.smooth_speed * dt).min(1.0);
        camera.translation = camera.translation.lerp(desired, t);
    }
}
