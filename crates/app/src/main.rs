use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy::winit::{UpdateMode, WinitSettings};

use operations::app_state::ConsoleState;
use operations::settings::DashboardSettings;

fn main() {
    let (settings, source) = DashboardSettings::load();

    let mut app = App::new();

    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: settings.window_title.clone(),
                    resolution: (settings.window_width, settings.window_height).into(),
                    present_mode: PresentMode::AutoVsync,
                    ..default()
                }),
                ..default()
            })
            .set(LogPlugin {
                filter: settings.log_filter.clone(),
                ..default()
            }),
    )
    // The clock ticks once a second; redraw at least that often while idle.
    .insert_resource(WinitSettings {
        focused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(250)),
        unfocused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_secs(1)),
    })
    .insert_resource(settings)
    .insert_resource(source)
    .add_systems(Startup, spawn_camera)
    .add_plugins((operations::OperationsPlugin, ui::UiPlugin))
    // The console opens on the dashboard rather than the standby screen.
    .insert_state(ConsoleState::Dashboard);

    app.run();
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
