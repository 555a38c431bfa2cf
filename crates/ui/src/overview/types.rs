//! View models for the overview panels.

use operations::metrics::{utilization_tier, AlertCounts};
use operations::records::{Alert, Station};
use operations::status::StatusTier;

/// One line of the station capacity list.
#[derive(Debug, Clone, PartialEq)]
pub struct CapacityRow {
    pub name: &'static str,
    /// "trains/capacity".
    pub occupancy: String,
    /// Stored utilization, shown as-is.
    pub utilization: u8,
    pub tier: StatusTier,
}

pub fn capacity_rows(stations: &[Station], warning_percent: u8) -> Vec<CapacityRow> {
    stations
        .iter()
        .map(|s| CapacityRow {
            name: s.name,
            occupancy: s.utilization_text(),
            utilization: s.utilization,
            tier: utilization_tier(s.utilization, warning_percent),
        })
        .collect()
}

/// "3 active, 1 critical".
pub fn alert_summary(alerts: &[Alert]) -> String {
    let counts = AlertCounts::from_alerts(alerts);
    if counts.critical == 0 {
        format!("{} active", counts.total)
    } else {
        format!("{} active, {} critical", counts.total, counts.critical)
    }
}
