//! Movement domain: player spawn and effector wiring.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::animation::{AnimationController, AnimatorParams, IkEffector, IkGoal, IkTargets};
use crate::movement::{GameLayer, MotionState, Player};

const CAPSULE_RADIUS: f32 = 0.4;
const CAPSULE_LENGTH: f32 = 1.0;

pub(crate) fn spawn_player(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    // Free-standing effector entities; the animation bridge copies bound
    // target poses onto these each frame.
    for goal in [
        IkGoal::LeftHand,
        IkGoal::RightHand,
        IkGoal::LeftFoot,
        IkGoal::RightFoot,
    ] {
        commands.spawn((IkEffector(goal), Transform::default()));
    }

    commands.spawn((
        // Identity & Movement
        (Player, MotionState::default()),
        // Animation
        (
            AnimatorParams::default(),
            AnimationController::default(),
            // Targets are bound by whatever scene content wants to pin a
            // hand or foot; unbound goals are skipped.
            IkTargets::default(),
        ),
        // Rendering
        Mesh3d(meshes.add(Capsule3d::new(CAPSULE_RADIUS, CAPSULE_LENGTH))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.9, 0.9, 0.9),
            ..default()
        })),
        Transform::from_xyz(0.0, 2.0, 0.0),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::capsule(CAPSULE_RADIUS, CAPSULE_LENGTH),
            // Facing is driven through the transform; depth stays locked so
            // motion lives in the XY plane.
            LockedAxes::ROTATION_LOCKED.lock_translation_z(),
            LinearVelocity::default(),
            GravityScale(0.0), // We handle gravity manually for more control
            Friction::new(0.0),
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground]),
        ),
    ));

    info!("Spawned player");
}
