use bevy::color::palettes::css;
use bevy::prelude::*;

use crate::config::PressVariant;
use crate::core::{ForceTier, Material};

/// Colours of the press scene. The two presses differ only in how the
/// sample is tinted.
#[derive(Resource, Clone, Debug)]
pub struct ScenePalette {
    pub background: Color,
    pub tube: Color,
    pub piston_base: Color,
    pub piston_rod: Color,
    pub broken: Color,
    pub caption: Color,
    /// Sample colour for each tier, `Idle` first
    pub tiers: [Color; 5],
}

impl ScenePalette {
    pub fn lab() -> Self {
        Self {
            caption: Color::BLACK,
            tiers: [
                css::GOLD.into(),
                css::ORANGE.into(),
                css::DARK_ORANGE.into(),
                css::ORANGE_RED.into(),
                css::RED.into(),
            ],
            ..Self::base()
        }
    }

    pub fn quick() -> Self {
        Self {
            caption: Color::WHITE,
            tiers: [
                css::DARK_RED.into(),
                css::YELLOW.into(),
                css::ORANGE.into(),
                css::ORANGE_RED.into(),
                css::RED.into(),
            ],
            ..Self::base()
        }
    }

    pub fn for_variant(variant: PressVariant) -> Self {
        match variant {
            PressVariant::Lab => Self::lab(),
            PressVariant::Quick => Self::quick(),
        }
    }

    fn base() -> Self {
        Self {
            background: css::LIGHT_GRAY.into(),
            tube: css::GRAY.into(),
            piston_base: css::DARK_GRAY.into(),
            piston_rod: css::DARK_BLUE.into(),
            broken: css::DARK_GRAY.into(),
            caption: Color::BLACK,
            tiers: [Color::BLACK; 5],
        }
    }

    pub fn material_color(&self, material: &Material) -> Color {
        if material.is_broken() {
            return self.broken;
        }
        let index = match material.tier() {
            ForceTier::Idle => 0,
            ForceTier::Low => 1,
            ForceTier::Medium => 2,
            ForceTier::High => 3,
            ForceTier::Critical => 4,
        };
        self.tiers[index]
    }
}
