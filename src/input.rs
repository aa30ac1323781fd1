use std::time::Duration;

use bevy::prelude::*;

use crate::config::PressVariant;
use crate::core::PressState;
use crate::materials::MaterialCatalog;

/// Digit keys selecting the quick press presets, in catalog order.
pub const PRESET_KEYS: [KeyCode; 5] = [
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
    KeyCode::Digit5,
];

/// Hold time before a held arrow key starts repeating.
pub const REPEAT_DELAY: Duration = Duration::from_millis(400);
/// Time between repeated steps of a held arrow key.
pub const REPEAT_INTERVAL: Duration = Duration::from_millis(50);

/// Key repeat for the arrow keys: one step on press, then a step every
/// `REPEAT_INTERVAL` once the key has been held for `REPEAT_DELAY`.
#[derive(Default)]
pub struct ArrowRepeat {
    held: Option<KeyCode>,
    timer: Timer,
}

impl ArrowRepeat {
    /// The arrow key that should move the piston this frame, if any.
    pub fn step(&mut self, keys: &ButtonInput<KeyCode>, delta: Duration) -> Option<KeyCode> {
        for key in [KeyCode::ArrowRight, KeyCode::ArrowLeft] {
            if keys.just_pressed(key) {
                self.held = Some(key);
                self.timer = Timer::new(REPEAT_DELAY, TimerMode::Once);
                return Some(key);
            }
        }

        let key = self.held?;
        if !keys.pressed(key) {
            self.held = None;
            return None;
        }
        self.timer.tick(delta);
        if self.timer.just_finished() {
            self.timer = Timer::new(REPEAT_INTERVAL, TimerMode::Repeating);
            return Some(key);
        }
        None
    }
}

pub fn keyboard_controls(
    keys: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    mut repeat: Local<ArrowRepeat>,
    mut state: ResMut<PressState>,
    mut catalog: ResMut<MaterialCatalog>,
) {
    match repeat.step(&keys, time.delta()) {
        Some(KeyCode::ArrowRight) => state.nudge_forward(),
        Some(KeyCode::ArrowLeft) => state.nudge_back(),
        _ => {}
    }

    if keys.just_pressed(KeyCode::KeyR) {
        state.reset();
        info!("Simulation reset");
    }

    if state.params().variant != PressVariant::Quick {
        return;
    }

    if keys.just_pressed(KeyCode::Space) && !state.press() {
        debug!("Space ignored: piston is not touching an intact sample");
    }

    let Some(index) = PRESET_KEYS.iter().position(|key| keys.just_pressed(*key)) else {
        return;
    };
    let bands = state.params().force_bands;
    if let Some(preset) = catalog.select(index) {
        let material = preset.to_material(bands);
        state.select_material(material);
    }
}
