use bevy::prelude::*;

pub mod app_state;
pub mod clock;
pub mod controls;
pub mod metrics;
pub mod records;
pub mod sample_data;
pub mod settings;
pub mod settings_error;
pub mod status;
pub mod tabs;

#[cfg(test)]
mod integration_tests;

use app_state::ConsoleState;
use controls::{ScenarioForm, SimulationToggle};
use metrics::{drifting_stations, AlertCounts, StationStatusCounts, TrainStatusCounts};
use records::NetworkSnapshot;
use settings::DashboardSettings;
use tabs::ActiveTab;

/// Stored utilization may differ from trains/capacity by rounding; anything
/// beyond this many percentage points is reported at startup.
const UTILIZATION_DRIFT_TOLERANCE: f32 = 1.0;

/// Domain state of the operations console: sample network, console state
/// machine, live clock and local control flags.
///
/// Requires `StatesPlugin` (part of `DefaultPlugins`). Insert a
/// [`DashboardSettings`] resource before adding this plugin to override the
/// defaults.
pub struct OperationsPlugin;

impl Plugin for OperationsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DashboardSettings>();
        let default_tab = app.world().resource::<DashboardSettings>().default_tab;

        app.init_state::<ConsoleState>()
            .init_resource::<NetworkSnapshot>()
            .init_resource::<SimulationToggle>()
            .init_resource::<ScenarioForm>()
            .insert_resource(ActiveTab(default_tab))
            .add_plugins(clock::LiveClockPlugin)
            .add_systems(Startup, (settings::log_settings_source, log_network_summary))
            .add_systems(
                OnEnter(ConsoleState::Dashboard),
                app_state::log_dashboard_enter,
            )
            .add_systems(
                OnExit(ConsoleState::Dashboard),
                app_state::log_dashboard_exit,
            );
    }
}

fn log_network_summary(snapshot: Res<NetworkSnapshot>) {
    let trains = TrainStatusCounts::from_trains(&snapshot.trains);
    let stations = StationStatusCounts::from_stations(&snapshot.stations);
    let alerts = AlertCounts::from_alerts(&snapshot.alerts);
    info!(
        "Network loaded: {} trains ({} on-time, {} delayed, {} critical), {} stations, {} alerts ({} critical)",
        trains.total,
        trains.on_time,
        trains.delayed,
        trains.critical,
        stations.total,
        alerts.total,
        alerts.critical,
    );
    for station in drifting_stations(&snapshot.stations, UTILIZATION_DRIFT_TOLERANCE) {
        warn!(
            "Station {} stores utilization {}% but {} is {:.1}%; displaying stored value",
            station.name,
            station.utilization,
            station.utilization_text(),
            station.derived_utilization()
        );
    }
}
