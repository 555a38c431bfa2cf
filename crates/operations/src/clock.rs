//! Live wall clock shown in the console header.
//!
//! [`LiveClock`] exists only while the dashboard is active: it is inserted on
//! entering [`ConsoleState::Dashboard`] and removed on leaving it, so no
//! periodic refresh outlives the view. The tick system is its only writer.

use bevy::prelude::*;
use chrono::{DateTime, Local, Timelike};

use crate::app_state::ConsoleState;
use crate::settings::DashboardSettings;

#[derive(Resource, Debug, Clone)]
pub struct LiveClock {
    now: DateTime<Local>,
    timer: Timer,
    refreshes: u64,
}

impl LiveClock {
    pub fn new(interval_secs: f32, now: DateTime<Local>) -> Self {
        Self {
            now,
            timer: Timer::from_seconds(interval_secs, TimerMode::Repeating),
            refreshes: 0,
        }
    }

    pub fn now(&self) -> DateTime<Local> {
        self.now
    }

    /// Number of timer-driven refreshes since the clock was started.
    pub fn refreshes(&self) -> u64 {
        self.refreshes
    }

    pub fn interval_secs(&self) -> f32 {
        self.timer.duration().as_secs_f32()
    }

    /// Advance the timer by `delta`; stores `now` when the interval elapses.
    /// Returns whether a refresh happened.
    pub fn advance(&mut self, delta: std::time::Duration, now: DateTime<Local>) -> bool {
        self.timer.tick(delta);
        if !self.timer.just_finished() {
            return false;
        }
        self.now = now;
        self.refreshes += self.timer.times_finished_this_tick() as u64;
        true
    }

    pub fn formatted(&self, twenty_four_hour: bool) -> String {
        format_clock(&self.now, twenty_four_hour)
    }
}

/// "14:05:09" or "2:05:09 PM".
pub fn format_clock<T: Timelike>(time: &T, twenty_four_hour: bool) -> String {
    if twenty_four_hour {
        return format!(
            "{:02}:{:02}:{:02}",
            time.hour(),
            time.minute(),
            time.second()
        );
    }
    let (pm, hour12) = time.hour12();
    format!(
        "{}:{:02}:{:02} {}",
        hour12,
        time.minute(),
        time.second(),
        if pm { "PM" } else { "AM" }
    )
}

pub fn start_live_clock(mut commands: Commands, settings: Res<DashboardSettings>) {
    let interval = match settings.validate() {
        Ok(()) => settings.clock_interval_secs,
        Err(e) => {
            warn!("{e}; live clock uses the default interval");
            DashboardSettings::default().clock_interval_secs
        }
    };
    info!("Starting live clock ({interval}s interval)");
    commands.insert_resource(LiveClock::new(interval, Local::now()));
}

pub fn stop_live_clock(mut commands: Commands) {
    info!("Stopping live clock");
    commands.remove_resource::<LiveClock>();
}

pub fn tick_live_clock(time: Res<Time>, mut clock: ResMut<LiveClock>) {
    clock.advance(time.delta(), Local::now());
}

/// Registers the clock lifecycle on [`ConsoleState::Dashboard`].
pub struct LiveClockPlugin;

impl Plugin for LiveClockPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(ConsoleState::Dashboard), start_live_clock)
            .add_systems(OnExit(ConsoleState::Dashboard), stop_live_clock)
            .add_systems(
                Update,
                tick_live_clock.run_if(resource_exists::<LiveClock>),
            );
    }
}
