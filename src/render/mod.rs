//! Drawing of the press scene
//!
//! Shapes and colours only; all state comes from `PressState`.

pub mod palette;
pub mod scene;

pub use palette::ScenePalette;
pub use scene::{
    MaterialBlock, MaterialCaption, PistonPart, spawn_camera, spawn_scene, sync_material_block,
    sync_piston_parts,
};
