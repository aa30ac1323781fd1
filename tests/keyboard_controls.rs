use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use press_sim::input::keyboard_controls;
use press_sim::materials::{lab_presets, quick_presets};
use press_sim::{
    MaterialCatalog, MaterialConfig, PressParams, PressState, SceneLayout, SystemSettings,
};

fn app_with(state: PressState, presets: Vec<MaterialConfig>) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(100)))
        .init_resource::<ButtonInput<KeyCode>>()
        .insert_resource(state)
        .insert_resource(MaterialCatalog::new(presets))
        .add_systems(Update, keyboard_controls);
    app
}

fn quick_app() -> App {
    let params = PressParams::quick();
    let presets = quick_presets();
    let material = presets[0].to_material(params.force_bands);
    let state = PressState::new(material, SystemSettings::quick(), params, &SceneLayout::quick());
    app_with(state, presets)
}

fn lab_app() -> App {
    let params = PressParams::lab();
    let presets = lab_presets();
    let material = presets[0].to_material(params.force_bands);
    let state = PressState::new(material, SystemSettings::default(), params, &SceneLayout::lab());
    app_with(state, presets)
}

fn tap(app: &mut App, key: KeyCode) {
    app.world_mut().resource_mut::<ButtonInput<KeyCode>>().press(key);
    app.update();
    let mut keys = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
    keys.release(key);
    keys.clear();
}

fn hold(app: &mut App, key: KeyCode, frames: usize) {
    app.world_mut().resource_mut::<ButtonInput<KeyCode>>().press(key);
    for _ in 0..frames {
        app.update();
        app.world_mut().resource_mut::<ButtonInput<KeyCode>>().clear();
    }
}

fn release(app: &mut App, key: KeyCode) {
    let mut keys = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
    keys.release(key);
    keys.clear();
}

fn state(app: &App) -> &PressState {
    app.world().resource::<PressState>()
}

fn drive_to_contact(app: &mut App) {
    let mut state = app.world_mut().resource_mut::<PressState>();
    while !state.is_contact() {
        state.nudge_forward();
    }
}

#[test]
fn digits_pick_quick_presets_in_catalog_order() {
    let mut app = quick_app();

    tap(&mut app, KeyCode::Digit3);
    assert_eq!(state(&app).material().name(), "Glass");
    assert_eq!(app.world().resource::<MaterialCatalog>().selected_index(), 2);

    tap(&mut app, KeyCode::Digit5);
    assert_eq!(state(&app).material().name(), "Plastic");

    tap(&mut app, KeyCode::Digit1);
    assert_eq!(state(&app).material().name(), "Steel");
    assert_eq!(app.world().resource::<MaterialCatalog>().selected_index(), 0);
}

#[test]
fn lab_press_ignores_digit_keys() {
    let mut app = lab_app();
    tap(&mut app, KeyCode::Digit2);
    assert_eq!(state(&app).material().name(), "Steel");
    assert_eq!(app.world().resource::<MaterialCatalog>().selected_index(), 0);
}

#[test]
fn space_restarts_pressing_only_on_quick_press() {
    let mut app = quick_app();
    drive_to_contact(&mut app);
    app.world_mut().resource_mut::<PressState>().advance(1.0);
    assert_eq!(state(&app).pressure(), 2_000_000.0);

    tap(&mut app, KeyCode::Space);
    assert!(state(&app).is_pressing());
    assert_eq!(state(&app).pressure(), 0.0);

    let mut app = lab_app();
    drive_to_contact(&mut app);
    app.world_mut().resource_mut::<PressState>().advance(1.0);
    tap(&mut app, KeyCode::Space);
    assert_eq!(state(&app).pressure(), 10_000_000.0);
}

#[test]
fn arrows_are_ignored_in_automatic_mode() {
    let mut app = lab_app();
    app.world_mut().resource_mut::<PressState>().toggle_mode();

    tap(&mut app, KeyCode::ArrowRight);
    hold(&mut app, KeyCode::ArrowRight, 10);
    assert_eq!(state(&app).piston().extension(), 0.0);
}

#[test]
fn held_arrow_keeps_moving_until_released() {
    let mut app = quick_app();

    tap(&mut app, KeyCode::ArrowRight);
    assert_eq!(state(&app).piston().extension(), 5.0);

    hold(&mut app, KeyCode::ArrowRight, 10);
    let extension = state(&app).piston().extension();
    assert!(extension > 15.0, "extension {extension}");

    release(&mut app, KeyCode::ArrowRight);
    for _ in 0..5 {
        app.update();
    }
    assert_eq!(state(&app).piston().extension(), extension);

    tap(&mut app, KeyCode::KeyR);
    assert_eq!(state(&app).piston().extension(), 0.0);
}
