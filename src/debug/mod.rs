//! Debug domain: motion-state overlay for manual tuning passes.

use bevy::prelude::*;

use crate::movement::{MotionState, Player};

/// Resource tracking debug overlay state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether the motion-state overlay is visible
    pub show_overlay: bool,
}

/// Marker for the motion-state overlay text
#[derive(Component, Debug)]
pub struct MotionOverlay;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Update, (toggle_overlay, update_motion_overlay).chain());
    }
}

/// Toggle the motion-state overlay with F1 or backtick key
fn toggle_overlay(keyboard: Res<ButtonInput<KeyCode>>, mut debug_state: ResMut<DebugState>) {
    if keyboard.just_pressed(KeyCode::F1) || keyboard.just_pressed(KeyCode::Backquote) {
        debug_state.show_overlay = !debug_state.show_overlay;
        info!(
            "[DEBUG] Motion overlay {}",
            if debug_state.show_overlay { "ON" } else { "OFF" }
        );
    }
}

/// Update the overlay text with the mover's current motion state
fn update_motion_overlay(
    mut commands: Commands,
    debug_state: Res<DebugState>,
    player_query: Query<(&Transform, &MotionState), With<Player>>,
    mut overlay_query: Query<&mut Text, With<MotionOverlay>>,
    existing_overlay: Query<Entity, With<MotionOverlay>>,
) {
    if !debug_state.show_overlay {
        // Cleanup overlay if it exists
        for entity in &existing_overlay {
            commands.entity(entity).despawn();
        }
        return;
    }

    // Ensure overlay exists
    if existing_overlay.is_empty() {
        spawn_motion_overlay(&mut commands);
        return;
    }

    // Update text
    if let (Some((transform, state)), Ok(mut text)) =
        (player_query.iter().next(), overlay_query.single_mut())
    {
        let pos = transform.translation;
        **text = format!(
            "Pos: ({:.2}, {:.2})\nHSpeed: {:.2} -> {:.2}\nVSpeed: {:.2}\nDir: {:.0}\nGrounded: {}",
            pos.x,
            pos.y,
            state.horizontal_speed,
            state.target_horizontal_speed,
            state.vertical_speed,
            state.move_direction.x,
            state.on_ground
        );
    }
}

fn spawn_motion_overlay(commands: &mut Commands) {
    commands.spawn((
        MotionOverlay,
        Text::new("Loading..."),
        TextFont {
            font_size: 12.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.9, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(20.0),
            bottom: Val::Px(20.0),
            padding: UiRect::all(Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        ZIndex(500),
    ));
}
