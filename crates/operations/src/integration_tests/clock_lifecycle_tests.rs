//! The live clock exists only while the dashboard is active.

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;

use crate::app_state::ConsoleState;
use crate::clock::LiveClock;
use crate::settings::DashboardSettings;

use crate::OperationsPlugin;

use super::{build_console_app, build_console_app_with, run_frames, set_console_state, FRAME};

#[test]
fn test_no_clock_in_standby() {
    let mut app = build_console_app();
    run_frames(&mut app, 20);
    assert!(app.world().get_resource::<LiveClock>().is_none());
}

#[test]
fn test_clock_starts_on_dashboard_enter() {
    let mut app = build_console_app();
    set_console_state(&mut app, ConsoleState::Dashboard);
    let clock = app.world().get_resource::<LiveClock>();
    assert!(clock.is_some(), "LiveClock should be inserted on entering Dashboard");
    assert_eq!(clock.map(LiveClock::refreshes), Some(0));
}

#[test]
fn test_clock_refreshes_within_1_1_seconds() {
    let mut app = build_console_app();
    set_console_state(&mut app, ConsoleState::Dashboard);

    // 11 frames of 100 ms.
    run_frames(&mut app, 11);

    let refreshes = app.world().resource::<LiveClock>().refreshes();
    assert!(refreshes >= 1, "expected at least one refresh, got {refreshes}");
}

#[test]
fn test_clock_keeps_refreshing_once_per_interval() {
    let mut app = build_console_app();
    set_console_state(&mut app, ConsoleState::Dashboard);
    run_frames(&mut app, 35);
    assert_eq!(app.world().resource::<LiveClock>().refreshes(), 3);
}

#[test]
fn test_clock_removed_on_dashboard_exit() {
    let mut app = build_console_app();
    set_console_state(&mut app, ConsoleState::Dashboard);
    run_frames(&mut app, 12);
    assert!(app.world().get_resource::<LiveClock>().is_some());

    set_console_state(&mut app, ConsoleState::Standby);
    assert!(
        app.world().get_resource::<LiveClock>().is_none(),
        "LiveClock should be removed on leaving Dashboard"
    );

    // No tick system runs against a missing resource; nothing reappears.
    run_frames(&mut app, 20);
    assert!(app.world().get_resource::<LiveClock>().is_none());
}

#[test]
fn test_clock_restarts_fresh_on_reentry() {
    let mut app = build_console_app();
    set_console_state(&mut app, ConsoleState::Dashboard);
    run_frames(&mut app, 25);
    assert!(app.world().resource::<LiveClock>().refreshes() >= 2);

    set_console_state(&mut app, ConsoleState::Standby);
    set_console_state(&mut app, ConsoleState::Dashboard);
    assert_eq!(app.world().resource::<LiveClock>().refreshes(), 0);
}

#[test]
fn test_clock_uses_configured_interval() {
    let settings = DashboardSettings {
        clock_interval_secs: 0.5,
        ..Default::default()
    };
    let mut app = build_console_app_with(settings);
    set_console_state(&mut app, ConsoleState::Dashboard);

    let clock = app.world().resource::<LiveClock>();
    assert!((clock.interval_secs() - 0.5).abs() < f32::EPSILON);

    run_frames(&mut app, 10);
    assert_eq!(app.world().resource::<LiveClock>().refreshes(), 2);
}

#[test]
fn test_out_of_range_interval_falls_back_to_default() {
    let settings = DashboardSettings {
        clock_interval_secs: 1e30,
        ..Default::default()
    };
    let mut app = build_console_app_with(settings);
    set_console_state(&mut app, ConsoleState::Dashboard);
    let clock = app.world().resource::<LiveClock>();
    assert_eq!(clock.interval_secs(), 1.0);
    run_frames(&mut app, 15);
    assert!(app.world().resource::<LiveClock>().refreshes() >= 1);
}

#[test]
fn test_launch_directly_into_dashboard_starts_clock() {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.add_plugins(StatesPlugin);
    app.insert_resource(TimeUpdateStrategy::ManualDuration(FRAME));
    app.add_plugins(OperationsPlugin);
    app.insert_state(ConsoleState::Dashboard);
    app.update();

    assert_eq!(
        *app.world().resource::<State<ConsoleState>>().get(),
        ConsoleState::Dashboard
    );
    assert!(app.world().get_resource::<LiveClock>().is_some());

    run_frames(&mut app, 15);
    assert!(app.world().resource::<LiveClock>().refreshes() >= 1);
}
