// Scene geometry and physical defaults for the press simulator.
// Canvas coordinates are in pixels with the origin at the top-left corner.
use crate::math::Real;

// Hydraulic tube
pub const TUBE_WIDTH: f32 = 400.0;
pub const TUBE_HEIGHT: f32 = 120.0;
pub const TUBE_INSET: f32 = 20.0;

// Material block
pub const MATERIAL_SIZE: f32 = 80.0;

// Piston parts
pub const PISTON_HEIGHT: f32 = 100.0;
pub const PISTON_BASE_WIDTH: f32 = 40.0;
pub const PISTON_PRESS_WIDTH: f32 = 60.0;
pub const PISTON_ROD_INSET: f32 = 10.0;
pub const MAX_EXTENSION: Real = 210.0;

// Lab press defaults
pub const DEFAULT_MAX_PRESSURE: Real = 150_000_000.0;
pub const DEFAULT_PRESSURE_INCREMENT: Real = 10_000_000.0;
pub const DEFAULT_CONTACT_AREA: Real = 0.01;

// Quick press system parameters
pub const QUICK_MAX_PRESSURE: Real = 15_000_000.0;
pub const QUICK_PRESSURE_INCREMENT: Real = 2_000_000.0;
pub const QUICK_PISTON_AREA: Real = 0.01;

// Piston travel
pub const LAB_MANUAL_STEP: Real = 15.0;
pub const QUICK_MANUAL_STEP: Real = 5.0;
pub const AUTO_ADVANCE_RATE: Real = 100.0;

// Settings dialog slider ranges
pub const CONTACT_AREA_RANGE: std::ops::RangeInclusive<Real> = 0.001..=0.1;
pub const MAX_PRESSURE_MPA_RANGE: std::ops::RangeInclusive<Real> = 50.0..=300.0;
pub const PRESSURE_INCREMENT_MPA_RANGE: std::ops::RangeInclusive<Real> = 1.0..=50.0;

pub const SETTINGS_FILE: &str = "settings.toml";
