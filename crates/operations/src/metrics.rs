//! Aggregate counts derived from the record collections.
//!
//! Single filter-and-count passes; iteration order is irrelevant and an empty
//! collection yields all-zero counts.

use crate::records::{Alert, Station, Train};
use crate::status::{AlertSeverity, StationStatus, StatusTier, TrainStatus};

/// Default utilization percentage above which a capacity bar is tinted as a warning.
pub const UTILIZATION_WARNING_PERCENT: u8 = 80;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TrainStatusCounts {
    pub on_time: usize,
    pub delayed: usize,
    pub critical: usize,
    pub total: usize,
}

impl TrainStatusCounts {
    pub fn from_trains(trains: &[Train]) -> Self {
        let count = |status: TrainStatus| trains.iter().filter(|t| t.status == status).count();
        Self {
            on_time: count(TrainStatus::OnTime),
            delayed: count(TrainStatus::Delayed),
            critical: count(TrainStatus::Critical),
            total: trains.len(),
        }
    }

    pub fn get(&self, status: TrainStatus) -> usize {
        match status {
            TrainStatus::OnTime => self.on_time,
            TrainStatus::Delayed => self.delayed,
            TrainStatus::Critical => self.critical,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StationStatusCounts {
    pub normal: usize,
    pub busy: usize,
    pub maintenance: usize,
    pub total: usize,
}

impl StationStatusCounts {
    pub fn from_stations(stations: &[Station]) -> Self {
        let count =
            |status: StationStatus| stations.iter().filter(|s| s.status == status).count();
        Self {
            normal: count(StationStatus::Normal),
            busy: count(StationStatus::Busy),
            maintenance: count(StationStatus::Maintenance),
            total: stations.len(),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AlertCounts {
    pub critical: usize,
    pub warning: usize,
    pub info: usize,
    pub total: usize,
}

impl AlertCounts {
    pub fn from_alerts(alerts: &[Alert]) -> Self {
        let count =
            |severity: AlertSeverity| alerts.iter().filter(|a| a.severity == severity).count();
        Self {
            critical: count(AlertSeverity::Critical),
            warning: count(AlertSeverity::Warning),
            info: count(AlertSeverity::Info),
            total: alerts.len(),
        }
    }
}

/// Tint for a station capacity bar: warning strictly above `threshold`.
pub fn utilization_tier(utilization: u8, threshold: u8) -> StatusTier {
    if utilization > threshold {
        StatusTier::Warning
    } else {
        StatusTier::Success
    }
}

/// Tint for a train's journey progress bar.
pub fn progress_tier(status: TrainStatus) -> StatusTier {
    status.presentation().tier
}

/// Stations whose stored utilization differs from trains/capacity by more than
/// `tolerance` percentage points.
pub fn drifting_stations(stations: &[Station], tolerance: f32) -> Vec<&Station> {
    stations
        .iter()
        .filter(|s| s.utilization_drift() > tolerance)
        .collect()
}
