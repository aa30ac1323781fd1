use bevy::prelude::*;

use crate::constants::{AUTO_ADVANCE_RATE, LAB_MANUAL_STEP, QUICK_MANUAL_STEP};
use crate::core::{CaptionStyle, ForceBands};
use crate::math::Real;

/// Which of the two press front-ends is running.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PressVariant {
    /// Side panel, automatic mode, settings dialog and settings file
    Lab,
    /// Digit-key presets, space to press, fixed system parameters
    Quick,
}

/// Behaviour parameters for the simulation loop and keyboard controls
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct PressParams {
    pub variant: PressVariant,

    /// Piston travel per arrow key press, in canvas pixels
    pub manual_step: Real,

    /// Piston travel per second in automatic mode
    pub auto_advance_rate: Real,

    /// Release the load on the sample when the piston loses contact
    pub reset_material_on_release: bool,

    /// Retracting always ends the pressing phase, even while still in contact
    pub retract_stops_pressing: bool,

    /// Colour tiers for the sample
    pub force_bands: ForceBands,

    pub caption: CaptionStyle,
}

impl Default for PressParams {
    fn default() -> Self {
        Self::lab()
    }
}

impl PressParams {
    pub fn lab() -> Self {
        Self {
            variant: PressVariant::Lab,
            manual_step: LAB_MANUAL_STEP,
            auto_advance_rate: AUTO_ADVANCE_RATE,
            reset_material_on_release: true,
            retract_stops_pressing: false,
            force_bands: ForceBands::lab(),
            caption: CaptionStyle::Lab,
        }
    }

    pub fn quick() -> Self {
        Self {
            variant: PressVariant::Quick,
            manual_step: QUICK_MANUAL_STEP,
            auto_advance_rate: AUTO_ADVANCE_RATE,
            reset_material_on_release: false,
            retract_stops_pressing: true,
            force_bands: ForceBands::quick(),
            caption: CaptionStyle::Quick,
        }
    }
}
