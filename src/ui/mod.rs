//! Lab press controls (egui side panel and dialogs) and the quick press
//! status overlay.

pub mod dialogs;
pub mod panel;
pub mod status;

use bevy::prelude::*;

use crate::config::SystemSettings;
use crate::math::{Real, mpa_to_pa, pa_to_mpa};

pub use dialogs::dialog_windows;
pub use panel::control_panel;
pub use status::{spawn_status_text, update_status_text};

/// Open dialog and the last status line of the control panel.
#[derive(Resource, Default)]
pub struct UiState {
    pub dialog: Option<Dialog>,
    pub notice: Option<Notice>,
}

pub enum Dialog {
    Info,
    Settings(SettingsDraft),
    AddMaterial(MaterialDraft),
    Message { title: String, body: String },
}

/// One-line feedback shown under the save button.
pub struct Notice {
    pub text: String,
    pub is_error: bool,
}

/// Slider values of the settings dialog, applied only on OK.
#[derive(Clone, Debug, PartialEq)]
pub struct SettingsDraft {
    pub contact_area: Real,
    pub max_pressure_mpa: Real,
    pub pressure_increment_mpa: Real,
    pub reset_after_apply: bool,
}

impl SettingsDraft {
    pub fn from_settings(settings: &SystemSettings) -> Self {
        Self {
            contact_area: settings.contact_area,
            max_pressure_mpa: pa_to_mpa(settings.max_pressure),
            pressure_increment_mpa: pa_to_mpa(settings.pressure_increment_per_second),
            reset_after_apply: true,
        }
    }

    pub fn to_settings(&self) -> SystemSettings {
        SystemSettings {
            max_pressure: mpa_to_pa(self.max_pressure_mpa),
            pressure_increment_per_second: mpa_to_pa(self.pressure_increment_mpa),
            contact_area: self.contact_area,
        }
    }
}

/// Fields of the add-material dialog.
#[derive(Clone, Debug, PartialEq)]
pub struct MaterialDraft {
    pub name: String,
    pub strength_mpa: String,
    pub fragile: bool,
    pub error: Option<String>,
}

impl Default for MaterialDraft {
    fn default() -> Self {
        Self {
            name: "My material".to_string(),
            strength_mpa: "50".to_string(),
            fragile: false,
            error: None,
        }
    }
}
