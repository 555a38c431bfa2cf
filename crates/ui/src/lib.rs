use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use operations::app_state::ConsoleState;

pub mod console_keybinds;
pub mod dashboard;
pub mod header;
pub mod live_trains;
pub mod network_map;
pub mod optimization;
pub mod overview;
pub mod standby;
pub mod tab_bar;
pub mod theme;
pub mod widgets;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .init_resource::<live_trains::SelectedTrain>()
            .add_systems(Startup, theme::apply_console_theme)
            .add_systems(
                Update,
                (
                    header::header_ui,
                    tab_bar::tab_bar_ui,
                    dashboard::dashboard_view_ui,
                )
                    .chain()
                    .run_if(in_state(ConsoleState::Dashboard)),
            )
            .add_systems(
                Update,
                standby::standby_ui.run_if(in_state(ConsoleState::Standby)),
            )
            .add_systems(
                Update,
                (
                    console_keybinds::standby_keybind,
                    console_keybinds::tab_keybinds.run_if(in_state(ConsoleState::Dashboard)),
                ),
            )
            .add_systems(
                OnExit(ConsoleState::Dashboard),
                live_trains::clear_selected_train,
            );
    }
}
