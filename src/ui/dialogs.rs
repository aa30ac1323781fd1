//! Modal windows of the lab press. While one is open the frame loop and the
//! keyboard controls are paused.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::constants::{CONTACT_AREA_RANGE, MAX_PRESSURE_MPA_RANGE, PRESSURE_INCREMENT_MPA_RANGE};
use crate::core::PressState;
use crate::error::PressError;
use crate::materials::{MaterialCatalog, parse_custom_material};

use super::{Dialog, MaterialDraft, SettingsDraft, UiState};

const INFO_TEXT: &str = "\
PHYSICAL FORMULA:
F(destr) = σ × A
where:
- σ - compressive strength of the material [Pa]
- A - contact area [m²]
- F - destruction force [N]

CONTROLS:
→ - move the piston forward
← - move the piston back
R - full simulation reset

MATERIALS:
Pick a standard material from the list or
create your own with \"Add material\".

HOW IT WORKS:
Pressure builds up as soon as the piston touches
the sample. When the force F reaches the
destruction force F(destr) the sample breaks.";

/// What the open dialog asked for this frame.
enum Outcome {
    Keep,
    Close,
    Replace(Dialog),
}

pub fn dialog_windows(
    mut contexts: EguiContexts,
    mut ui_state: ResMut<UiState>,
    mut state: ResMut<PressState>,
    mut catalog: ResMut<MaterialCatalog>,
) -> Result {
    let ctx = contexts.ctx_mut()?;
    let Some(dialog) = ui_state.dialog.as_mut() else {
        return Ok(());
    };

    let outcome = match dialog {
        Dialog::Info => info_window(ctx),
        Dialog::Settings(draft) => settings_window(ctx, draft, &mut state),
        Dialog::AddMaterial(draft) => add_material_window(ctx, draft, &mut state, &mut catalog),
        Dialog::Message { title, body } => message_window(ctx, title, body),
    };

    match outcome {
        Outcome::Keep => {}
        Outcome::Close => ui_state.dialog = None,
        Outcome::Replace(next) => ui_state.dialog = Some(next),
    }
    Ok(())
}

fn modal(title: &str) -> egui::Window<'_> {
    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
}

fn info_window(ctx: &egui::Context) -> Outcome {
    let mut outcome = Outcome::Keep;
    modal("Simulator information").show(ctx, |ui| {
        ui.label(egui::RichText::new("Process physics and controls").strong());
        ui.label(INFO_TEXT);
        if ui.button("OK").clicked() {
            outcome = Outcome::Close;
        }
    });
    outcome
}

fn settings_window(ctx: &egui::Context, draft: &mut SettingsDraft, state: &mut PressState) -> Outcome {
    let mut outcome = Outcome::Keep;
    modal("System parameters").show(ctx, |ui| {
        ui.label("Configure the press parameters");
        egui::Grid::new("settings_grid")
            .num_columns(2)
            .spacing([10.0, 10.0])
            .show(ui, |ui| {
                ui.label("Contact area:");
                ui.add(
                    egui::Slider::new(&mut draft.contact_area, CONTACT_AREA_RANGE)
                        .step_by(0.001)
                        .fixed_decimals(3)
                        .suffix(" m²"),
                );
                ui.end_row();

                ui.label("Max pressure:");
                ui.add(
                    egui::Slider::new(&mut draft.max_pressure_mpa, MAX_PRESSURE_MPA_RANGE)
                        .step_by(10.0)
                        .fixed_decimals(0)
                        .suffix(" MPa"),
                );
                ui.end_row();

                ui.label("Pressure rate:");
                ui.add(
                    egui::Slider::new(&mut draft.pressure_increment_mpa, PRESSURE_INCREMENT_MPA_RANGE)
                        .step_by(1.0)
                        .fixed_decimals(0)
                        .suffix(" MPa/s"),
                );
                ui.end_row();
            });
        ui.checkbox(
            &mut draft.reset_after_apply,
            "Reset the simulation after applying",
        );

        ui.horizontal(|ui| {
            if ui.button("OK").clicked() {
                let settings = draft.to_settings();
                state.apply_settings(settings);
                if draft.reset_after_apply {
                    state.reset();
                }
                info!("Applied system settings: {settings:?}");
                outcome = Outcome::Close;
            }
            if ui.button("Cancel").clicked() {
                outcome = Outcome::Close;
            }
        });
    });
    outcome
}

fn add_material_window(
    ctx: &egui::Context,
    draft: &mut MaterialDraft,
    state: &mut PressState,
    catalog: &mut MaterialCatalog,
) -> Outcome {
    let mut outcome = Outcome::Keep;
    modal("Create material").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label("Name:");
            ui.text_edit_singleline(&mut draft.name);
        });
        ui.horizontal(|ui| {
            ui.label("Strength (MPa):");
            ui.text_edit_singleline(&mut draft.strength_mpa);
        });
        ui.horizontal(|ui| {
            ui.radio_value(&mut draft.fragile, true, "Fragile");
            ui.radio_value(&mut draft.fragile, false, "Plastic");
        });
        if let Some(error) = &draft.error {
            ui.colored_label(egui::Color32::RED, error);
        }

        ui.horizontal(|ui| {
            if ui.button("Create").clicked() {
                outcome = create_material(draft, state, catalog);
            }
            if ui.button("Cancel").clicked() {
                outcome = Outcome::Close;
            }
        });
    });
    outcome
}

fn create_material(
    draft: &mut MaterialDraft,
    state: &mut PressState,
    catalog: &mut MaterialCatalog,
) -> Outcome {
    let contact_area = state.material().contact_area();
    match parse_custom_material(&draft.name, &draft.strength_mpa, draft.fragile, contact_area) {
        Ok(preset) => {
            let body = format!(
                "Material '{}' created!\nStrength: {:.0} MPa\nType: {}",
                preset.name,
                preset.strength_mpa,
                if preset.fragile { "fragile" } else { "plastic" }
            );
            let bands = state.params().force_bands;
            state.select_material(preset.to_material(bands));
            catalog.add(preset);
            Outcome::Replace(Dialog::Message {
                title: "Material created".to_string(),
                body,
            })
        }
        Err(PressError::EmptyName) => {
            info!("Material creation cancelled: empty name");
            Outcome::Close
        }
        Err(e) => {
            warn!("Rejected custom material: {e}");
            draft.error = Some(e.to_string());
            Outcome::Keep
        }
    }
}

fn message_window(ctx: &egui::Context, title: &str, body: &str) -> Outcome {
    let mut outcome = Outcome::Keep;
    modal(title).show(ctx, |ui| {
        ui.label(body);
        if ui.button("OK").clicked() {
            outcome = Outcome::Close;
        }
    });
    outcome
}
