//! Press scene: tube, piston parts and the material block.
//!
//! Every shape is a unit quad scaled to its canvas rectangle each frame.

use bevy::prelude::*;

use crate::constants::{
    MATERIAL_SIZE, PISTON_BASE_WIDTH, PISTON_HEIGHT, PISTON_PRESS_WIDTH, PISTON_ROD_INSET,
    TUBE_HEIGHT, TUBE_WIDTH,
};
use crate::core::{PressState, SceneLayout};

use super::palette::ScenePalette;

const TUBE_Z: f32 = 0.0;
const MATERIAL_Z: f32 = 1.0;
const PISTON_Z: f32 = 2.0;
const CAPTION_Z: f32 = 3.0;

#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PistonPart {
    Base,
    Rod,
    Face,
}

impl PistonPart {
    /// Offset from the piston origin and size of this part at `extension`.
    pub fn rect(self, extension: f32) -> (Vec2, Vec2) {
        match self {
            Self::Base => (Vec2::ZERO, Vec2::new(PISTON_BASE_WIDTH, PISTON_HEIGHT)),
            Self::Rod => (
                Vec2::new(PISTON_BASE_WIDTH, PISTON_ROD_INSET),
                Vec2::new(extension, PISTON_HEIGHT - 2.0 * PISTON_ROD_INSET),
            ),
            Self::Face => (
                Vec2::new(PISTON_BASE_WIDTH + extension, 0.0),
                Vec2::new(PISTON_PRESS_WIDTH / 2.0, PISTON_HEIGHT),
            ),
        }
    }
}

#[derive(Component)]
pub struct MaterialBlock;

#[derive(Component)]
pub struct MaterialCaption;

pub fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

pub fn spawn_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    layout: Res<SceneLayout>,
    palette: Res<ScenePalette>,
    state: Res<PressState>,
) {
    let quad = meshes.add(Rectangle::new(1.0, 1.0));

    commands.spawn((
        Mesh2d(quad.clone()),
        MeshMaterial2d(materials.add(palette.tube)),
        layout.rect_transform(
            layout.tube_origin(),
            Vec2::new(TUBE_WIDTH, TUBE_HEIGHT),
            TUBE_Z,
        ),
    ));

    let material_origin = layout.material_origin();
    let material_size = Vec2::splat(MATERIAL_SIZE);
    commands.spawn((
        MaterialBlock,
        Mesh2d(quad.clone()),
        MeshMaterial2d(materials.add(palette.material_color(state.material()))),
        layout.rect_transform(material_origin, material_size, MATERIAL_Z),
    ));
    commands.spawn((
        MaterialCaption,
        Text2d::new(state.caption()),
        TextFont {
            font_size: 10.0,
            ..default()
        },
        TextColor(palette.caption),
        Transform::from_translation(
            layout.to_world(material_origin + material_size / 2.0, CAPTION_Z),
        ),
    ));

    for (part, color) in [
        (PistonPart::Base, palette.piston_base),
        (PistonPart::Rod, palette.piston_rod),
        (PistonPart::Face, palette.piston_rod),
    ] {
        let (offset, size) = part.rect(0.0);
        commands.spawn((
            part,
            Mesh2d(quad.clone()),
            MeshMaterial2d(materials.add(color)),
            layout.rect_transform(layout.piston_origin() + offset, size, PISTON_Z),
        ));
    }
}

pub fn sync_piston_parts(
    state: Res<PressState>,
    layout: Res<SceneLayout>,
    mut parts: Query<(&PistonPart, &mut Transform)>,
) {
    let extension = state.piston().extension() as f32;
    let origin = layout.piston_origin();
    for (part, mut transform) in parts.iter_mut() {
        let (offset, size) = part.rect(extension);
        *transform = layout.rect_transform(origin + offset, size, PISTON_Z);
    }
}

pub fn sync_material_block(
    state: Res<PressState>,
    palette: Res<ScenePalette>,
    mut color_materials: ResMut<Assets<ColorMaterial>>,
    mut blocks: Query<(&mut Transform, &MeshMaterial2d<ColorMaterial>), With<MaterialBlock>>,
    mut captions: Query<&mut Text2d, With<MaterialCaption>>,
) {
    let material = state.material();
    let (scale_x, scale_y) = material.deformation();
    let color = palette.material_color(material);

    for (mut transform, handle) in blocks.iter_mut() {
        transform.scale = Vec3::new(
            MATERIAL_SIZE * scale_x as f32,
            MATERIAL_SIZE * scale_y as f32,
            1.0,
        );
        if let Some(color_material) = color_materials.get_mut(&handle.0) {
            if color_material.color != color {
                color_material.color = color;
            }
        }
    }

    let label = state.caption();
    for mut caption in captions.iter_mut() {
        if caption.0 != label {
            caption.0 = label.clone();
        }
    }
}
