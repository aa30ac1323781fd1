//! Material sample under the press
//!
//! A material breaks once the applied force reaches its destruction force,
//! `compressive_strength * contact_area`.

use crate::math::{Real, newtons_to_kn, pa_to_mpa, safe_ratio};

/// Discrete load intensity used to colour the sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ForceTier {
    Idle,
    Low,
    Medium,
    High,
    Critical,
}

/// Four ascending force-ratio thresholds splitting the five tiers.
///
/// A ratio falls into the highest tier whose threshold it strictly exceeds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ForceBands {
    pub thresholds: [Real; 4],
}

impl ForceBands {
    pub const fn new(thresholds: [Real; 4]) -> Self {
        Self { thresholds }
    }

    /// Bands used by the lab press.
    pub const fn lab() -> Self {
        Self::new([0.3, 0.5, 0.7, 0.9])
    }

    /// Bands used by the quick press.
    pub const fn quick() -> Self {
        Self::new([0.2, 0.4, 0.6, 0.8])
    }

    pub fn tier(&self, ratio: Real) -> ForceTier {
        let [low, medium, high, critical] = self.thresholds;
        if ratio > critical {
            ForceTier::Critical
        } else if ratio > high {
            ForceTier::High
        } else if ratio > medium {
            ForceTier::Medium
        } else if ratio > low {
            ForceTier::Low
        } else {
            ForceTier::Idle
        }
    }
}

impl Default for ForceBands {
    fn default() -> Self {
        Self::lab()
    }
}

/// Caption layout of the block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CaptionStyle {
    /// Strength in MPa, forces in kN
    #[default]
    Lab,
    /// Rating and force in N
    Quick,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    name: String,
    compressive_strength: Real, // Pa
    contact_area: Real,         // m²
    destruction_force: Real,    // N, fixed at construction
    is_fragile: bool,
    is_broken: bool,
    current_force: Real,
    tier: ForceTier,
    bands: ForceBands,
}

impl Material {
    pub fn new(
        name: impl Into<String>,
        compressive_strength: Real,
        contact_area: Real,
        is_fragile: bool,
    ) -> Self {
        Self {
            name: name.into(),
            compressive_strength,
            contact_area,
            destruction_force: compressive_strength * contact_area,
            is_fragile,
            is_broken: false,
            current_force: 0.0,
            tier: ForceTier::Idle,
            bands: ForceBands::default(),
        }
    }

    pub fn with_bands(mut self, bands: ForceBands) -> Self {
        self.bands = bands;
        self.tier = bands.tier(self.force_ratio());
        self
    }

    /// Record `force` and break if it reaches the destruction force.
    /// Ignored once the material is broken.
    pub fn apply_force(&mut self, force: Real) {
        if self.is_broken {
            return;
        }

        self.current_force = force;
        if force >= self.destruction_force {
            self.is_broken = true;
        }
        self.tier = self.bands.tier(self.force_ratio());
    }

    pub fn reset(&mut self) {
        self.is_broken = false;
        self.current_force = 0.0;
        self.tier = ForceTier::Idle;
    }

    pub fn force_ratio(&self) -> Real {
        safe_ratio(self.current_force, self.destruction_force)
    }

    /// Horizontal and vertical scale of the drawn block.
    ///
    /// Fragile samples narrow by up to 15% past half load and shrink to 70%
    /// when broken. Ductile samples keep their shape.
    pub fn deformation(&self) -> (Real, Real) {
        if !self.is_fragile {
            return (1.0, 1.0);
        }
        if self.is_broken {
            return (0.7, 0.7);
        }
        let ratio = self.force_ratio();
        if ratio > 0.5 {
            (1.0 - ratio * 0.15, 1.0)
        } else {
            (1.0, 1.0)
        }
    }

    /// Caption drawn on the block.
    pub fn label(&self, style: CaptionStyle) -> String {
        match style {
            CaptionStyle::Lab => {
                let status = if self.is_broken {
                    "DESTROYED!".to_string()
                } else {
                    format!("F={:.0} kN", newtons_to_kn(self.current_force))
                };
                format!(
                    "{}\nS={:.0} MPa\nF(destr)={:.0} kN\n{}\n{}",
                    self.name,
                    pa_to_mpa(self.compressive_strength),
                    newtons_to_kn(self.destruction_force),
                    self.kind_label(),
                    status
                )
            }
            CaptionStyle::Quick => {
                let status = if self.is_broken {
                    "BROKEN!".to_string()
                } else {
                    format!("F={:.0} N", self.current_force)
                };
                let kind = if self.is_fragile { "Fragile" } else { "Strong" };
                format!(
                    "{}\nS={:.0} N\n{}\n{}",
                    self.name, self.destruction_force, kind, status
                )
            }
        }
    }

    pub fn kind_label(&self) -> &'static str {
        if self.is_fragile { "Fragile" } else { "Plastic" }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn compressive_strength(&self) -> Real {
        self.compressive_strength
    }

    pub fn contact_area(&self) -> Real {
        self.contact_area
    }

    pub fn destruction_force(&self) -> Real {
        self.destruction_force
    }

    pub fn is_fragile(&self) -> bool {
        self.is_fragile
    }

    pub fn is_broken(&self) -> bool {
        self.is_broken
    }

    pub fn current_force(&self) -> Real {
        self.current_force
    }

    pub fn tier(&self) -> ForceTier {
        self.tier
    }
}
