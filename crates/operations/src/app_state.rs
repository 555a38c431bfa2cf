//! Top-level console state machine.
//!
//! [`ConsoleState::Dashboard`] is the active view; [`ConsoleState::Standby`]
//! is the lock screen. Resources scoped to the dashboard (the live clock) are
//! acquired on entering `Dashboard` and released on leaving it.

use bevy::prelude::*;

#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ConsoleState {
    /// Lock screen; nothing time-driven runs.
    #[default]
    Standby,
    /// The tabbed operations dashboard is displayed.
    Dashboard,
}

impl ConsoleState {
    /// State reached by the standby toggle key from this state.
    pub fn toggled(self) -> Self {
        match self {
            Self::Standby => Self::Dashboard,
            Self::Dashboard => Self::Standby,
        }
    }
}

pub(crate) fn log_dashboard_enter() {
    info!("Console entered dashboard view");
}

pub(crate) fn log_dashboard_exit() {
    info!("Console left dashboard view");
}
