//! Overview tab: headline KPIs, recent alerts and station capacity.

mod panels;
pub mod types;

use bevy_egui::egui;

use operations::records::NetworkSnapshot;

pub use types::{alert_summary, capacity_rows, CapacityRow};

/// Renders the overview tab into the central panel.
pub fn overview_view(ui: &mut egui::Ui, snapshot: &NetworkSnapshot, warning_percent: u8) {
    panels::render_kpi_cards(ui, &snapshot.kpis);
    ui.add_space(12.0);
    ui.columns(2, |columns| {
        panels::render_alerts(&mut columns[0], &snapshot.alerts);
        panels::render_capacity(
            &mut columns[1],
            &capacity_rows(&snapshot.stations, warning_percent),
        );
    });
}
