//! Scene placement shared by the force model and the renderer.

use bevy::prelude::*;

use crate::constants::{
    MATERIAL_SIZE, PISTON_BASE_WIDTH, PISTON_HEIGHT, PISTON_PRESS_WIDTH, TUBE_HEIGHT, TUBE_INSET,
    TUBE_WIDTH,
};
use crate::math::{Point, Real};

/// Window size and tube position. Canvas points are y-down, like a 2D
/// drawing surface; `to_world` maps them into bevy's centred, y-up space.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct SceneLayout {
    pub window: Vec2,
    pub tube_center: Point,
}

impl SceneLayout {
    /// 800x600 window, the left 500px hold the press, the rest is the side panel.
    pub const fn lab() -> Self {
        Self {
            window: Vec2::new(800.0, 600.0),
            tube_center: Vec2::new(250.0, 300.0),
        }
    }

    pub const fn quick() -> Self {
        Self {
            window: Vec2::new(600.0, 300.0),
            tube_center: Vec2::new(300.0, 150.0),
        }
    }

    pub fn tube_origin(&self) -> Point {
        self.tube_center - Vec2::new(TUBE_WIDTH, TUBE_HEIGHT) / 2.0
    }

    /// Top-left corner of the material block, pinned to the far end of the tube.
    pub fn material_origin(&self) -> Point {
        Vec2::new(
            self.tube_center.x + TUBE_WIDTH / 2.0 - TUBE_INSET - MATERIAL_SIZE,
            self.tube_center.y - MATERIAL_SIZE / 2.0,
        )
    }

    /// Top-left corner of the piston base.
    pub fn piston_origin(&self) -> Point {
        Vec2::new(
            self.tube_center.x - TUBE_WIDTH / 2.0 + TUBE_INSET,
            self.tube_center.y - PISTON_HEIGHT / 2.0,
        )
    }

    /// Distance from the piston origin to the press face at zero extension.
    ///
    /// The reach ends at the drawn face (base plus half the press width) in
    /// both layouts, so either press touches the sample only at full
    /// extension. Counting the whole press width would make the quick press
    /// touch 30px earlier.
    pub fn piston_reach(&self) -> Real {
        Real::from(PISTON_BASE_WIDTH + PISTON_PRESS_WIDTH / 2.0)
    }

    pub fn to_world(&self, point: Point, z: f32) -> Vec3 {
        Vec3::new(point.x - self.window.x / 2.0, self.window.y / 2.0 - point.y, z)
    }

    /// Transform for a unit quad covering the canvas rectangle at `origin`.
    pub fn rect_transform(&self, origin: Point, size: Vec2, z: f32) -> Transform {
        Transform::from_translation(self.to_world(origin + size / 2.0, z))
            .with_scale(size.extend(1.0))
    }
}

impl Default for SceneLayout {
    fn default() -> Self {
        Self::lab()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_presses_touch_at_full_extension() {
        for layout in [SceneLayout::lab(), SceneLayout::quick()] {
            let material_left = Real::from(layout.material_origin().x);
            let piston_left = Real::from(layout.piston_origin().x);
            assert_eq!(
                material_left - piston_left - layout.piston_reach(),
                crate::constants::MAX_EXTENSION
            );
        }
    }

    #[test]
    fn canvas_center_maps_to_world_origin() {
        let layout = SceneLayout::quick();
        assert_eq!(layout.to_world(Vec2::new(300.0, 150.0), 0.0), Vec3::ZERO);
        assert_eq!(
            layout.to_world(Vec2::ZERO, 1.0),
            Vec3::new(-300.0, 150.0, 1.0)
        );
    }

    #[test]
    fn rect_transform_centres_and_scales() {
        let layout = SceneLayout::lab();
        let transform = layout.rect_transform(Vec2::new(0.0, 0.0), Vec2::new(40.0, 100.0), 0.0);
        assert_eq!(transform.translation, Vec3::new(-380.0, 250.0, 0.0));
        assert_eq!(transform.scale, Vec3::new(40.0, 100.0, 1.0));
    }
}
