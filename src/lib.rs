use bevy::prelude::*;
use bevy::window::WindowResolution;
use bevy_egui::EguiPrimaryContextPass;

pub mod config;
pub mod constants;
pub mod core;
pub mod error;
pub mod input;
pub mod materials;
pub mod math;
pub mod render;
pub mod simulation;
pub mod ui;

// Public re-exports for clean API
pub use crate::config::{PressParams, PressVariant, SettingsFile, SettingsStore, SystemSettings};
pub use crate::core::{
    CaptionStyle, DriveMode, ForceBands, ForceTier, Material, Piston, PressState, SceneLayout,
};
pub use crate::error::{PressError, SettingsError};
pub use crate::materials::{MaterialCatalog, MaterialConfig};

use crate::constants::DEFAULT_CONTACT_AREA;
use crate::input::keyboard_controls;
use crate::materials::quick_presets;
use crate::render::{
    ScenePalette, spawn_camera, spawn_scene, sync_material_block, sync_piston_parts,
};
use crate::simulation::{advance_press, no_open_dialog};
use crate::ui::{UiState, control_panel, dialog_windows, spawn_status_text, update_status_text};

/// Wires the press model, scene and controls of one variant into an app.
///
/// The lab variant needs `bevy_egui::EguiPlugin` to be added as well.
pub struct PressPlugin {
    pub variant: PressVariant,
    pub settings_store: SettingsStore,
}

impl PressPlugin {
    pub fn lab() -> Self {
        Self {
            variant: PressVariant::Lab,
            settings_store: SettingsStore::default(),
        }
    }

    pub fn quick() -> Self {
        Self {
            variant: PressVariant::Quick,
            settings_store: SettingsStore::default(),
        }
    }

    pub fn with_settings_store(mut self, store: SettingsStore) -> Self {
        self.settings_store = store;
        self
    }

    /// Initial press state, presets and layout for this variant. The lab
    /// press reads the settings file here and clamps it to the dialog ranges.
    pub fn initial_state(&self) -> (PressState, MaterialCatalog, SceneLayout) {
        let (params, layout, settings, presets) = match self.variant {
            PressVariant::Lab => {
                let file = self.settings_store.load_or_default();
                let loaded = file.settings_or_default();
                let settings = loaded.clamped_to_dialog_ranges();
                if settings != loaded {
                    warn!(
                        "Settings in {} are out of range, clamped to {settings:?}",
                        self.settings_store.path().display()
                    );
                }
                (
                    PressParams::lab(),
                    SceneLayout::lab(),
                    settings,
                    file.materials_or_default(),
                )
            }
            PressVariant::Quick => (
                PressParams::quick(),
                SceneLayout::quick(),
                SystemSettings::quick(),
                quick_presets(),
            ),
        };

        let catalog = MaterialCatalog::new(presets);
        let material = catalog
            .selected()
            .cloned()
            .unwrap_or_else(|| MaterialConfig::new("Steel", 250.0, false, DEFAULT_CONTACT_AREA))
            .to_material(params.force_bands);
        let state = PressState::new(material, settings, params, &layout);
        (state, catalog, layout)
    }
}

impl Plugin for PressPlugin {
    fn build(&self, app: &mut App) {
        let (state, catalog, layout) = self.initial_state();
        let palette = ScenePalette::for_variant(self.variant);

        app.insert_resource(ClearColor(palette.background))
            .insert_resource(palette)
            .insert_resource(layout)
            .insert_resource(state)
            .insert_resource(catalog)
            .insert_resource(self.settings_store.clone())
            .init_resource::<UiState>()
            .add_systems(Startup, (spawn_camera, spawn_scene))
            .add_systems(
                Update,
                (
                    (keyboard_controls, advance_press)
                        .chain()
                        .run_if(no_open_dialog),
                    sync_piston_parts,
                    sync_material_block,
                )
                    .chain(),
            );

        match self.variant {
            PressVariant::Lab => {
                app.add_systems(EguiPrimaryContextPass, (control_panel, dialog_windows).chain());
            }
            PressVariant::Quick => {
                app.add_systems(Startup, spawn_status_text)
                    .add_systems(Update, update_status_text.after(advance_press));
            }
        }
    }
}

/// Primary window settings for a variant.
pub fn window_plugin(variant: PressVariant) -> WindowPlugin {
    let (layout, title) = match variant {
        PressVariant::Lab => (SceneLayout::lab(), "Press simulator"),
        PressVariant::Quick => (
            SceneLayout::quick(),
            "Quick press simulator - 1-5 materials, R reset",
        ),
    };
    WindowPlugin {
        primary_window: Some(Window {
            title: title.to_string(),
            resolution: WindowResolution::new(layout.window.x as u32, layout.window.y as u32),
            resizable: false,
            ..default()
        }),
        ..default()
    }
}
