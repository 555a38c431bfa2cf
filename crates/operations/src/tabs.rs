//! Dashboard tab selection. Pure client-side view state, not persisted.

use bevy::prelude::*;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DashboardTab {
    #[default]
    Overview,
    LiveTrains,
    NetworkMap,
    Optimization,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 4] = [
        Self::Overview,
        Self::LiveTrains,
        Self::NetworkMap,
        Self::Optimization,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::LiveTrains => "Live Trains",
            Self::NetworkMap => "Network Map",
            Self::Optimization => "Optimization",
        }
    }

    /// Tab for a 1-based shortcut number (keys 1..=4).
    pub fn from_shortcut(n: usize) -> Option<Self> {
        n.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }
}

/// Currently selected tab.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ActiveTab(pub DashboardTab);
