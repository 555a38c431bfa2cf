//! Keyboard shortcuts for the console.
//!
//! `Esc` toggles between the dashboard and the standby screen; `1`..`4`
//! select dashboard tabs. Keys are ignored when egui has keyboard focus.

use bevy::prelude::*;
use bevy_egui::EguiContexts;

use operations::app_state::ConsoleState;
use operations::tabs::{ActiveTab, DashboardTab};

const TAB_KEYS: [KeyCode; 4] = [
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
];

/// Tab bound to a digit key, if any.
pub fn tab_for_key(key: KeyCode) -> Option<DashboardTab> {
    let index = TAB_KEYS.iter().position(|k| *k == key)?;
    DashboardTab::from_shortcut(index + 1)
}

pub fn standby_keybind(
    keyboard: Res<ButtonInput<KeyCode>>,
    state: Res<State<ConsoleState>>,
    mut next_state: ResMut<NextState<ConsoleState>>,
    mut contexts: EguiContexts,
) {
    if contexts.ctx_mut().wants_keyboard_input() {
        return;
    }
    if keyboard.just_pressed(KeyCode::Escape) {
        next_state.set(state.get().toggled());
    }
}

pub fn tab_keybinds(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut active: ResMut<ActiveTab>,
    mut contexts: EguiContexts,
) {
    if contexts.ctx_mut().wants_keyboard_input() {
        return;
    }
    let pressed = TAB_KEYS
        .iter()
        .find(|key| keyboard.just_pressed(**key))
        .and_then(|key| tab_for_key(*key));
    if let Some(tab) = pressed {
        if active.0 != tab {
            debug!("Tab shortcut selected {}", tab.label());
            active.0 = tab;
        }
    }
}
