use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::config::SettingsStore;
use crate::core::{DriveMode, PressState};
use crate::materials::{MaterialCatalog, MaterialConfig};
use crate::math::{newtons_to_kn, pa_to_mpa};

use super::{Dialog, MaterialDraft, Notice, SettingsDraft, UiState};

const PANEL_WIDTH: f32 = 300.0;

pub fn control_panel(
    mut contexts: EguiContexts,
    mut ui_state: ResMut<UiState>,
    mut state: ResMut<PressState>,
    mut catalog: ResMut<MaterialCatalog>,
    store: Res<SettingsStore>,
) -> Result {
    let ctx = contexts.ctx_mut()?;
    let modal_open = ui_state.dialog.is_some();

    egui::SidePanel::right("press_controls")
        .exact_width(PANEL_WIDTH)
        .resizable(false)
        .show(ctx, |ui| {
            ui.add_enabled_ui(!modal_open, |ui| {
                ui.heading("PRESS SIMULATOR");

                if ui.button("Information").clicked() {
                    ui_state.dialog = Some(Dialog::Info);
                }
                if ui.button("Configure system parameters").clicked() {
                    ui_state.dialog =
                        Some(Dialog::Settings(SettingsDraft::from_settings(state.settings())));
                }

                ui.separator();
                ui.label(egui::RichText::new("SIMULATION MODE:").strong());
                let (mode_text, toggle_text) = match state.mode() {
                    DriveMode::Manual => ("Manual mode", "Switch to Auto"),
                    DriveMode::Automatic => ("Automatic mode", "Switch to Manual"),
                };
                ui.label(mode_text);
                if ui.button(toggle_text).clicked() {
                    let mode = state.toggle_mode();
                    info!("Drive mode: {mode:?}");
                }

                ui.separator();
                ui.label(egui::RichText::new("Material:").strong());
                material_picker(ui, &mut state, &mut catalog);
                if ui.button("Add material").clicked() {
                    ui_state.dialog = Some(Dialog::AddMaterial(MaterialDraft::default()));
                }

                ui.separator();
                ui.label(state.settings().summary());
                ui.label(material_info(&state));
                readouts(ui, &state);

                ui.separator();
                if ui.button("Save settings").clicked() {
                    ui_state.notice = Some(save_settings(&store, &state, &catalog));
                }
                if let Some(notice) = &ui_state.notice {
                    let color = if notice.is_error {
                        egui::Color32::RED
                    } else {
                        egui::Color32::DARK_GREEN
                    };
                    ui.colored_label(color, &notice.text);
                }

                ui.separator();
                ui.label(
                    egui::RichText::new(
                        "Controls:\n→ - forward (manual only)\n← - back (manual only)\nR - reset",
                    )
                    .color(egui::Color32::GRAY),
                );
            });
        });

    Ok(())
}

fn material_picker(ui: &mut egui::Ui, state: &mut PressState, catalog: &mut MaterialCatalog) {
    let current = catalog.selected_index();
    let mut selected = current;
    egui::ComboBox::from_id_salt("material_picker")
        .width(PANEL_WIDTH - 50.0)
        .selected_text(catalog.selected().map(MaterialConfig::describe).unwrap_or_default())
        .show_ui(ui, |ui| {
            for (index, preset) in catalog.iter().enumerate() {
                ui.selectable_value(&mut selected, index, preset.describe());
            }
        });

    if selected == current {
        return;
    }
    let bands = state.params().force_bands;
    if let Some(preset) = catalog.select(selected) {
        state.select_material(preset.to_material(bands));
    }
}

fn material_info(state: &PressState) -> String {
    let material = state.material();
    format!(
        "Material: {}\nStrength: {:.0} MPa\nF(destr): {:.0} kN\nType: {}",
        material.name(),
        pa_to_mpa(material.compressive_strength()),
        newtons_to_kn(material.destruction_force()),
        material.kind_label()
    )
}

fn readouts(ui: &mut egui::Ui, state: &PressState) {
    let broken = state.material().is_broken();
    let (pressure, force) = if state.is_pressing() || broken {
        (state.pressure(), state.piston().current_force())
    } else {
        (0.0, 0.0)
    };
    let color = if broken {
        egui::Color32::RED
    } else {
        ui.visuals().text_color()
    };
    ui.colored_label(color, format!("Pressure: {:.1} MPa", pa_to_mpa(pressure)));
    ui.colored_label(color, format!("Force: {:.0} kN", newtons_to_kn(force)));
}

fn save_settings(store: &SettingsStore, state: &PressState, catalog: &MaterialCatalog) -> Notice {
    match store.save(state.settings(), &catalog.to_vec()) {
        Ok(()) => Notice {
            text: format!("Saved to {}", store.path().display()),
            is_error: false,
        },
        Err(e) => {
            error!("Could not save settings: {e}");
            Notice {
                text: e.to_string(),
                is_error: true,
            }
        }
    }
}
