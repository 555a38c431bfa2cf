//! Read-only domain records for the operations console.
//!
//! All records are built once from literals (see [`crate::sample_data`]) and
//! are never mutated afterwards.

use bevy::prelude::*;

use crate::status::{AlertSeverity, StationStatus, StatusTier, TrainStatus};

/// Placement on the map canvas, both axes in percent (0..=100).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapPosition {
    pub x: f32,
    pub y: f32,
}

impl MapPosition {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Fractions in 0..=1, clamped, for mapping onto a canvas rect.
    pub fn normalized(self) -> (f32, f32) {
        (
            (self.x / 100.0).clamp(0.0, 1.0),
            (self.y / 100.0).clamp(0.0, 1.0),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Train {
    pub id: &'static str,
    pub name: &'static str,
    pub status: TrainStatus,
    /// Delay in minutes; only expected to be non-zero when not on time.
    pub delay_min: u32,
    pub location: &'static str,
    /// Journey-segment completion in percent.
    pub progress: u8,
    pub platform: Option<&'static str>,
    pub next_station: Option<&'static str>,
    pub eta: Option<&'static str>,
    pub position: MapPosition,
}

impl Train {
    /// Progress clamped to 0..=100.
    pub fn progress_percent(&self) -> u8 {
        self.progress.min(100)
    }

    /// "15 min delay", or `None` when the train is not delayed.
    pub fn delay_text(&self) -> Option<String> {
        (self.delay_min > 0).then(|| format!("{} min delay", self.delay_min))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Station {
    pub id: &'static str,
    pub name: &'static str,
    pub position: MapPosition,
    pub trains: u32,
    pub capacity: u32,
    /// Stored utilization percentage, displayed verbatim.
    pub utilization: u8,
    pub status: StationStatus,
}

impl Station {
    /// "15/18" style occupancy text.
    pub fn utilization_text(&self) -> String {
        format!("{}/{}", self.trains, self.capacity)
    }

    /// Utilization recomputed from trains and capacity. Not used for display.
    pub fn derived_utilization(&self) -> f32 {
        if self.capacity == 0 {
            return 0.0;
        }
        self.trains as f32 / self.capacity as f32 * 100.0
    }

    /// Absolute difference between the stored and derived utilization.
    pub fn utilization_drift(&self) -> f32 {
        (self.utilization as f32 - self.derived_utilization()).abs()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Alert {
    pub id: &'static str,
    pub severity: AlertSeverity,
    pub message: &'static str,
    pub time: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// Main trunk route, drawn solid.
    Trunk,
    /// Secondary connection, drawn dashed.
    Connection,
}

/// Hand-authored connector drawn between two map points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapLink {
    pub from: MapPosition,
    pub to: MapPosition,
    pub kind: LinkKind,
}

/// One overview KPI card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KpiCard {
    pub title: &'static str,
    pub value: &'static str,
    pub delta: &'static str,
    pub delta_tier: StatusTier,
    pub caption: &'static str,
}

/// Figures shown on the schedule optimization card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptimizationSummary {
    pub last_run: &'static str,
    pub conflicts_resolved: u32,
    pub minutes_saved: u32,
}

/// Everything the console displays. Built once at startup, never written.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct NetworkSnapshot {
    pub trains: Vec<Train>,
    pub stations: Vec<Station>,
    pub alerts: Vec<Alert>,
    pub links: Vec<MapLink>,
    pub kpis: Vec<KpiCard>,
    pub optimization: OptimizationSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(trains: u32, capacity: u32, utilization: u8) -> Station {
        Station {
            id: "S",
            name: "Test",
            position: MapPosition::new(0.0, 0.0),
            trains,
            capacity,
            utilization,
            status: StationStatus::Normal,
        }
    }

    #[test]
    fn test_utilization_text_and_stored_value() {
        let s = station(15, 18, 83);
        assert_eq!(s.utilization_text(), "15/18");
        assert_eq!(s.utilization, 83);
        assert!((s.derived_utilization() - 83.333).abs() < 0.01);
    }

    #[test]
    fn test_derived_utilization_zero_capacity() {
        let s = station(3, 0, 0);
        assert_eq!(s.derived_utilization(), 0.0);
    }

    #[test]
    fn test_utilization_drift() {
        assert!(station(15, 18, 83).utilization_drift() < 1.0);
        assert!(station(15, 18, 50).utilization_drift() > 30.0);
    }

    #[test]
    fn test_map_position_normalized_clamps() {
        assert_eq!(MapPosition::new(50.0, 25.0).normalized(), (0.5, 0.25));
        assert_eq!(MapPosition::new(-10.0, 150.0).normalized(), (0.0, 1.0));
    }
}
