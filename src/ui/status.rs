use bevy::prelude::*;

use crate::core::PressState;
use crate::math::{newtons_to_kn, pa_to_mpa};

#[derive(Component)]
pub struct StatusText;

pub fn spawn_status_text(mut commands: Commands) {
    commands.spawn((
        Text::default(),
        TextFont {
            font_size: 14.0,
            ..default()
        },
        TextColor(Color::BLACK),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(8.0),
            left: Val::Px(8.0),
            ..default()
        },
        StatusText,
    ));
}

pub fn update_status_text(state: Res<PressState>, mut query: Query<&mut Text, With<StatusText>>) {
    let material = state.material();
    let status = if material.is_broken() {
        "BROKEN"
    } else if state.is_pressing() {
        "pressing"
    } else if state.is_contact() {
        "in contact (Space to press)"
    } else {
        "idle"
    };

    for mut text in &mut query {
        text.0 = format!(
            "{} - {}\nPressure: {:.1} MPa   Force: {:.1} kN\n1-5 materials, Right/Left move, Space press, R reset",
            material.name(),
            status,
            pa_to_mpa(state.pressure()),
            newtons_to_kn(state.piston().current_force()),
        );
    }
}
