//! Local control state behind the header and optimization panel buttons.
//!
//! None of these controls reach the displayed data: the simulate toggle and
//! the scenario form are placeholders for a simulation engine that does not
//! exist. Nothing here may read or write [`crate::records::NetworkSnapshot`].

use bevy::prelude::*;

/// The "Simulate / Pause" flag.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SimulationToggle(pub bool);

impl SimulationToggle {
    pub fn toggle(&mut self) {
        self.0 = !self.0;
    }

    pub fn is_simulating(&self) -> bool {
        self.0
    }

    /// Header button text.
    pub fn button_label(&self) -> &'static str {
        if self.0 {
            "Pause"
        } else {
            "Simulate"
        }
    }

    /// Scenario panel button text.
    pub fn scenario_button_label(&self) -> &'static str {
        if self.0 {
            "Simulating..."
        } else {
            "Start Simulation"
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScenarioKind {
    #[default]
    PeakHourTraffic,
    WeatherDisruption,
    TrackMaintenance,
    EmergencyResponse,
}

impl ScenarioKind {
    pub const ALL: [ScenarioKind; 4] = [
        Self::PeakHourTraffic,
        Self::WeatherDisruption,
        Self::TrackMaintenance,
        Self::EmergencyResponse,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::PeakHourTraffic => "Peak Hour Traffic",
            Self::WeatherDisruption => "Weather Disruption",
            Self::TrackMaintenance => "Track Maintenance",
            Self::EmergencyResponse => "Emergency Response",
        }
    }
}

/// Scenario simulation form inputs.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScenarioForm {
    pub kind: ScenarioKind,
    pub duration_hours: u32,
}

impl ScenarioForm {
    pub const MIN_HOURS: u32 = 1;
    pub const MAX_HOURS: u32 = 24;
    pub const DEFAULT_HOURS: u32 = 4;

    pub fn set_duration(&mut self, hours: u32) {
        self.duration_hours = hours.clamp(Self::MIN_HOURS, Self::MAX_HOURS);
    }
}

impl Default for ScenarioForm {
    fn default() -> Self {
        Self {
            kind: ScenarioKind::default(),
            duration_hours: Self::DEFAULT_HOURS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_restores() {
        let mut toggle = SimulationToggle::default();
        assert!(!toggle.is_simulating());
        toggle.toggle();
        assert!(toggle.is_simulating());
        toggle.toggle();
        assert_eq!(toggle, SimulationToggle::default());
    }

    #[test]
    fn test_labels_follow_flag() {
        let mut toggle = SimulationToggle::default();
        assert_eq!(toggle.button_label(), "Simulate");
        assert_eq!(toggle.scenario_button_label(), "Start Simulation");
        toggle.toggle();
        assert_eq!(toggle.button_label(), "Pause");
        assert_eq!(toggle.scenario_button_label(), "Simulating...");
    }

    #[test]
    fn test_scenario_duration_clamped() {
        let mut form = ScenarioForm::default();
        assert_eq!(form.duration_hours, 4);
        form.set_duration(0);
        assert_eq!(form.duration_hours, 1);
        form.set_duration(99);
        assert_eq!(form.duration_hours, 24);
        form.set_duration(12);
        assert_eq!(form.duration_hours, 12);
    }

    #[test]
    fn test_scenario_kinds() {
        assert_eq!(ScenarioKind::default(), ScenarioKind::PeakHourTraffic);
        assert_eq!(ScenarioKind::ALL.len(), 4);
        assert_eq!(ScenarioKind::EmergencyResponse.label(), "Emergency Response");
    }
}
