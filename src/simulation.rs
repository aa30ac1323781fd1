use bevy::prelude::*;

use crate::core::PressState;
use crate::ui::UiState;

/// Per-frame press update.
pub fn advance_press(time: Res<Time>, mut state: ResMut<PressState>) {
    state.advance(time.delta_secs_f64());
}

/// Run condition: the frame loop is paused while a dialog is open.
pub fn no_open_dialog(ui: Res<UiState>) -> bool {
    ui.dialog.is_none()
}
