use bevy::prelude::*;
use bevy_egui::EguiPlugin;
use press_sim::{PressPlugin, PressVariant, window_plugin};

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(window_plugin(PressVariant::Lab)))
        .add_plugins(EguiPlugin::default())
        .add_plugins(PressPlugin::lab())
        .run();
}
