use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::constants::{
    CONTACT_AREA_RANGE, DEFAULT_CONTACT_AREA, DEFAULT_MAX_PRESSURE, DEFAULT_PRESSURE_INCREMENT,
    MAX_PRESSURE_MPA_RANGE, PRESSURE_INCREMENT_MPA_RANGE, QUICK_MAX_PRESSURE,
    QUICK_PISTON_AREA, QUICK_PRESSURE_INCREMENT,
};
use crate::math::{Real, m2_to_cm2, mpa_to_pa, pa_to_mpa};

/// Process-wide hydraulic system parameters.
#[derive(Resource, Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SystemSettings {
    /// Pressure ceiling in Pa
    pub max_pressure: Real,

    /// Pressure ramp while pressing, in Pa per second
    #[serde(rename = "pressure_increment")]
    pub pressure_increment_per_second: Real,

    /// Piston contact area in m²
    pub contact_area: Real,
}

impl Default for SystemSettings {
    fn default() -> Self {
        Self {
            max_pressure: DEFAULT_MAX_PRESSURE,
            pressure_increment_per_second: DEFAULT_PRESSURE_INCREMENT,
            contact_area: DEFAULT_CONTACT_AREA,
        }
    }
}

impl SystemSettings {
    /// Fixed parameters of the quick press: 15 MPa ceiling, 2 MPa/s, 10 cm².
    pub fn quick() -> Self {
        Self {
            max_pressure: QUICK_MAX_PRESSURE,
            pressure_increment_per_second: QUICK_PRESSURE_INCREMENT,
            contact_area: QUICK_PISTON_AREA,
        }
    }

    /// Clamp every field into the range the settings dialog offers.
    pub fn clamped_to_dialog_ranges(self) -> Self {
        Self {
            max_pressure: mpa_to_pa(
                pa_to_mpa(self.max_pressure)
                    .clamp(*MAX_PRESSURE_MPA_RANGE.start(), *MAX_PRESSURE_MPA_RANGE.end()),
            ),
            pressure_increment_per_second: mpa_to_pa(
                pa_to_mpa(self.pressure_increment_per_second).clamp(
                    *PRESSURE_INCREMENT_MPA_RANGE.start(),
                    *PRESSURE_INCREMENT_MPA_RANGE.end(),
                ),
            ),
            contact_area: self
                .contact_area
                .clamp(*CONTACT_AREA_RANGE.start(), *CONTACT_AREA_RANGE.end()),
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "SYSTEM PARAMETERS:\n• Contact area: {:.3} m² ({:.1} cm²)\n• Max pressure: {:.0} MPa\n• Pressure rate: {:.0} MPa/s",
            self.contact_area,
            m2_to_cm2(self.contact_area),
            pa_to_mpa(self.max_pressure),
            pa_to_mpa(self.pressure_increment_per_second),
        )
    }
}
