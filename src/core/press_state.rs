use bevy::prelude::*;

use crate::config::{PressParams, SystemSettings};
use crate::math::{Real, pa_to_mpa};

use super::layout::SceneLayout;
use super::material::Material;
use super::piston::Piston;

/// Whether the piston is driven by the keyboard or advances on its own.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DriveMode {
    #[default]
    Manual,
    Automatic,
}

/// Aggregate press state: the sample, the piston and the pressure ramp.
#[derive(Resource, Clone, Debug)]
pub struct PressState {
    material: Material,
    piston: Piston,
    settings: SystemSettings,
    params: PressParams,
    piston_origin_x: Real,
    piston_reach: Real,
    material_left: Real,
    pressure: Real,
    is_pressing: bool,
    mode: DriveMode,
}

impl PressState {
    pub fn new(
        material: Material,
        settings: SystemSettings,
        params: PressParams,
        layout: &SceneLayout,
    ) -> Self {
        Self {
            material: material.with_bands(params.force_bands),
            piston: Piston::new(settings.contact_area),
            settings,
            params,
            piston_origin_x: Real::from(layout.piston_origin().x),
            piston_reach: layout.piston_reach(),
            material_left: Real::from(layout.material_origin().x),
            pressure: 0.0,
            is_pressing: false,
            mode: DriveMode::Manual,
        }
    }

    /// Advance one frame by `dt` seconds.
    ///
    /// In automatic mode the piston creeps forward and starts pressing on
    /// contact. While pressing, pressure ramps linearly up to the configured
    /// maximum and the resulting force is applied to the sample.
    pub fn advance(&mut self, dt: Real) {
        if self.mode == DriveMode::Automatic && !self.material.is_broken() {
            self.piston.extend(self.params.auto_advance_rate * dt);
            if self.is_contact() && !self.is_pressing {
                self.start_pressing();
            }
        }

        if !self.is_pressing || self.material.is_broken() {
            return;
        }

        self.pressure = (self.pressure + self.settings.pressure_increment_per_second * dt)
            .min(self.settings.max_pressure);
        self.piston.set_hydraulic_pressure(self.pressure);
        self.material.apply_force(self.piston.current_force());

        if self.material.is_broken() {
            info!(
                "{} destroyed at {:.0} N ({:.2} MPa)",
                self.material.name(),
                self.piston.current_force(),
                pa_to_mpa(self.pressure)
            );
            self.is_pressing = false;
        }
    }

    /// The press face has reached the sample.
    pub fn is_contact(&self) -> bool {
        self.piston_origin_x + self.piston_reach + self.piston.extension() >= self.material_left
    }

    /// Arrow key forward. Ignored in automatic mode.
    pub fn nudge_forward(&mut self) {
        if self.mode == DriveMode::Automatic {
            return;
        }
        self.piston.extend(self.params.manual_step);
        self.update_contact();
    }

    /// Arrow key back. Ignored in automatic mode.
    pub fn nudge_back(&mut self) {
        if self.mode == DriveMode::Automatic {
            return;
        }
        self.piston.retract(self.params.manual_step);
        if self.params.retract_stops_pressing {
            self.stop_pressing();
        } else {
            self.update_contact();
        }
    }

    /// Start pressing on request if the piston touches an intact sample.
    /// Returns whether pressing started.
    pub fn press(&mut self) -> bool {
        if self.is_contact() && !self.material.is_broken() {
            self.start_pressing();
            true
        } else {
            false
        }
    }

    fn update_contact(&mut self) {
        if self.material.is_broken() {
            return;
        }
        let contact = self.is_contact();
        if contact && !self.is_pressing {
            self.start_pressing();
        } else if !contact {
            self.stop_pressing();
        }
    }

    fn start_pressing(&mut self) {
        self.is_pressing = true;
        self.pressure = 0.0;
        self.piston.set_hydraulic_pressure(0.0);
    }

    fn stop_pressing(&mut self) {
        if self.is_pressing && self.params.reset_material_on_release {
            self.material.reset();
        }
        self.is_pressing = false;
    }

    /// Return piston and sample to their initial state.
    pub fn reset(&mut self) {
        self.material.reset();
        self.piston.reset();
        self.is_pressing = false;
        self.pressure = 0.0;
    }

    pub fn toggle_mode(&mut self) -> DriveMode {
        self.mode = match self.mode {
            DriveMode::Manual => DriveMode::Automatic,
            DriveMode::Automatic => DriveMode::Manual,
        };
        self.reset();
        self.mode
    }

    /// Swap in a new sample and reset the run.
    pub fn select_material(&mut self, material: Material) {
        info!(
            "Selected {} (S={:.0} MPa, breaks at {:.0} N)",
            material.name(),
            pa_to_mpa(material.compressive_strength()),
            material.destruction_force()
        );
        self.material = material.with_bands(self.params.force_bands);
        self.reset();
    }

    /// Apply new system settings. The piston area follows the contact area.
    pub fn apply_settings(&mut self, settings: SystemSettings) {
        self.settings = settings;
        self.piston.set_area(settings.contact_area);
        self.pressure = self.pressure.min(settings.max_pressure);
    }

    /// Block caption in this press's style.
    pub fn caption(&self) -> String {
        self.material.label(self.params.caption)
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    pub fn piston(&self) -> &Piston {
        &self.piston
    }

    pub fn settings(&self) -> &SystemSettings {
        &self.settings
    }

    pub fn params(&self) -> &PressParams {
        &self.params
    }

    pub fn pressure(&self) -> Real {
        self.pressure
    }

    pub fn is_pressing(&self) -> bool {
        self.is_pressing
    }

    pub fn mode(&self) -> DriveMode {
        self.mode
    }
}
