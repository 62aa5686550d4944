//! Movement domain: demo room spawn for manual testing.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, Ground};

pub(crate) fn spawn_test_room(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);

    let ground_material = materials.add(StandardMaterial {
        base_color: ground_color,
        ..default()
    });
    let platform_material = materials.add(StandardMaterial {
        base_color: platform_color,
        ..default()
    });

    // Ground slab
    commands.spawn((
        Ground,
        Mesh3d(meshes.add(Cuboid::new(40.0, 1.0, 4.0))),
        MeshMaterial3d(ground_material),
        Transform::from_xyz(0.0, -0.5, 0.0),
        RigidBody::Static,
        Collider::cuboid(40.0, 1.0, 4.0),
        ground_layers,
    ));

    // Platforms at jumpable heights
    let platforms = [
        (Vec3::new(-6.0, 1.5, 0.0), Vec3::new(4.0, 0.5, 4.0)),
        (Vec3::new(6.0, 2.5, 0.0), Vec3::new(4.0, 0.5, 4.0)),
        (Vec3::new(0.0, 4.0, 0.0), Vec3::new(3.0, 0.5, 4.0)),
    ];

    for (position, size) in platforms {
        commands.spawn((
            Ground,
            Mesh3d(meshes.add(Cuboid::new(size.x, size.y, size.z))),
            MeshMaterial3d(platform_material.clone()),
            Transform::from_translation(position),
            RigidBody::Static,
            Collider::cuboid(size.x, size.y, size.z),
            ground_layers,
        ));
    }

    // Light
    commands.spawn((
        DirectionalLight {
            illuminance: 8_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(4.0, 12.0, -6.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}
