// Compact press: digit keys switch presets, Space starts pressing on contact.
use bevy::prelude::*;
use press_sim::{PressPlugin, PressVariant, window_plugin};

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(window_plugin(PressVariant::Quick)))
        .add_plugins(PressPlugin::quick())
        .run();
}
