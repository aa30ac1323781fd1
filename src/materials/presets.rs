//! Serialisable material presets
//!
//! Presets store strength in MPa, the unit users type and read; the force
//! model works in Pa.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_CONTACT_AREA;
use crate::core::{ForceBands, Material};
use crate::error::PressError;
use crate::math::{Real, mpa_to_pa, pa_to_mpa};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MaterialConfig {
    pub name: String,
    pub strength_mpa: Real,
    pub fragile: bool,
    pub contact_area: Real,
}

impl MaterialConfig {
    pub fn new(name: impl Into<String>, strength_mpa: Real, fragile: bool, contact_area: Real) -> Self {
        Self {
            name: name.into(),
            strength_mpa,
            fragile,
            contact_area,
        }
    }

    pub fn to_material(&self, bands: ForceBands) -> Material {
        Material::new(
            self.name.clone(),
            mpa_to_pa(self.strength_mpa),
            self.contact_area,
            self.fragile,
        )
        .with_bands(bands)
    }

    pub fn from_material(material: &Material) -> Self {
        Self::new(
            material.name(),
            pa_to_mpa(material.compressive_strength()),
            material.is_fragile(),
            material.contact_area(),
        )
    }

    /// Entry text for the material picker.
    pub fn describe(&self) -> String {
        format!(
            "{} (σ={:.0} MPa, {})",
            self.name,
            self.strength_mpa,
            if self.fragile { "fragile" } else { "plastic" }
        )
    }
}

/// Build a preset from the add-material dialog fields.
///
/// The name is trimmed and must not be empty; strength must parse as a
/// positive, finite number of MPa.
pub fn parse_custom_material(
    name: &str,
    strength_text: &str,
    fragile: bool,
    contact_area: Real,
) -> Result<MaterialConfig, PressError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(PressError::EmptyName);
    }

    let strength_text = strength_text.trim();
    let strength: Real = strength_text
        .parse()
        .map_err(|_| PressError::InvalidStrength(strength_text.to_string()))?;
    if !strength.is_finite() || strength <= 0.0 {
        return Err(PressError::NonPositiveStrength(strength));
    }

    Ok(MaterialConfig::new(name, strength, fragile, contact_area))
}

/// Presets of the lab press, strength in MPa.
pub fn lab_presets() -> Vec<MaterialConfig> {
    [
        ("Steel", 250.0, false),
        ("Concrete", 30.0, true),
        ("Glass", 50.0, true),
        ("Wood", 40.0, false),
    ]
    .into_iter()
    .map(|(name, mpa, fragile)| MaterialConfig::new(name, mpa, fragile, DEFAULT_CONTACT_AREA))
    .collect()
}

/// Presets of the quick press, bound to digit keys 1-5.
///
/// These are rated by breaking force (steel 100 kN, concrete 50 kN,
/// glass 15 kN, wood 30 kN, plastic 20 kN) spread over a 10 cm² face.
pub fn quick_presets() -> Vec<MaterialConfig> {
    [
        ("Steel", 10.0, false),
        ("Concrete", 5.0, true),
        ("Glass", 1.5, true),
        ("Wood", 3.0, false),
        ("Plastic", 2.0, false),
    ]
    .into_iter()
    .map(|(name, mpa, fragile)| MaterialConfig::new(name, mpa, fragile, DEFAULT_CONTACT_AREA))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_converts_mpa_to_pa() {
        let material = MaterialConfig::new("Steel", 250.0, false, 0.01).to_material(ForceBands::lab());
        assert_eq!(material.compressive_strength(), 250_000_000.0);
        assert_eq!(material.destruction_force(), 250_000_000.0 * 0.01);
    }

    #[test]
    fn from_material_restores_the_preset() {
        let preset = MaterialConfig::new("Glass", 50.0, true, 0.02);
        let material = preset.to_material(ForceBands::lab());
        assert_eq!(MaterialConfig::from_material(&material), preset);
    }

    #[test]
    fn custom_material_trims_name() {
        let preset = parse_custom_material("  Granite ", "120", false, 0.01).unwrap();
        assert_eq!(preset.name, "Granite");
        assert_eq!(preset.strength_mpa, 120.0);
        assert!(!preset.fragile);
    }

    #[test]
    fn custom_material_rejects_bad_input() {
        assert_eq!(
            parse_custom_material("   ", "50", true, 0.01),
            Err(PressError::EmptyName)
        );
        assert_eq!(
            parse_custom_material("Foam", "abc", true, 0.01),
            Err(PressError::InvalidStrength("abc".into()))
        );
        assert_eq!(
            parse_custom_material("Foam", "0", true, 0.01),
            Err(PressError::NonPositiveStrength(0.0))
        );
        assert_eq!(
            parse_custom_material("Foam", "-4", true, 0.01),
            Err(PressError::NonPositiveStrength(-4.0))
        );
        assert!(matches!(
            parse_custom_material("Foam", "inf", true, 0.01),
            Err(PressError::NonPositiveStrength(_))
        ));
    }

    #[test]
    fn quick_presets_keep_their_breaking_forces() {
        let forces: Vec<Real> = quick_presets()
            .iter()
            .map(|preset| preset.to_material(ForceBands::quick()).destruction_force())
            .collect();
        let expected = [100_000.0, 50_000.0, 15_000.0, 30_000.0, 20_000.0];
        for (force, expected) in forces.iter().zip(expected) {
            assert!((force - expected).abs() < 1e-6, "{force} vs {expected}");
        }
    }
}
