//! Headless integration tests: a Bevy `App` with `MinimalPlugins`,
//! `StatesPlugin` and `OperationsPlugin`, advancing time manually.

use std::time::Duration;

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;

use crate::app_state::ConsoleState;
use crate::settings::DashboardSettings;
use crate::OperationsPlugin;

mod clock_lifecycle_tests;

/// Simulated frame length used by every test app.
pub(crate) const FRAME: Duration = Duration::from_millis(100);

/// Console app in its default (standby) state, Startup already run.
pub(crate) fn build_console_app() -> App {
    build_console_app_with(DashboardSettings::default())
}

pub(crate) fn build_console_app_with(settings: DashboardSettings) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.add_plugins(StatesPlugin);
    app.insert_resource(TimeUpdateStrategy::ManualDuration(FRAME));
    app.insert_resource(settings);
    app.add_plugins(OperationsPlugin);
    app.update();
    app
}

pub(crate) fn set_console_state(app: &mut App, state: ConsoleState) {
    app.world_mut()
        .resource_mut::<NextState<ConsoleState>>()
        .set(state);
    app.world_mut().run_schedule(StateTransition);
}

pub(crate) fn run_frames(app: &mut App, n: u32) {
    for _ in 0..n {
        app.update();
    }
}
