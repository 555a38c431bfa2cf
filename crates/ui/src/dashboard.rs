//! Central panel: renders whichever tab is active.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use operations::controls::{ScenarioForm, SimulationToggle};
use operations::records::NetworkSnapshot;
use operations::settings::DashboardSettings;
use operations::tabs::{ActiveTab, DashboardTab};

use crate::live_trains::{live_trains_view, SelectedTrain};
use crate::network_map::network_map_view;
use crate::optimization::optimization_view;
use crate::overview::overview_view;
use crate::theme;

pub fn dashboard_view_ui(
    mut contexts: EguiContexts,
    active: Res<ActiveTab>,
    snapshot: Res<NetworkSnapshot>,
    settings: Res<DashboardSettings>,
    simulation: Res<SimulationToggle>,
    mut selected: ResMut<SelectedTrain>,
    mut form: ResMut<ScenarioForm>,
) {
    egui::CentralPanel::default()
        .frame(
            egui::Frame::new()
                .fill(theme::PANEL)
                .inner_margin(egui::Margin::same(16)),
        )
        .show(contexts.ctx_mut(), |ui| {
            egui::ScrollArea::vertical()
                .id_salt("dashboard_scroll")
                .auto_shrink([false, false])
                .show(ui, |ui| match active.0 {
                    DashboardTab::Overview => {
                        overview_view(ui, &snapshot, settings.utilization_warning_percent)
                    }
                    DashboardTab::LiveTrains => {
                        live_trains_view(ui, &snapshot.trains, &mut selected)
                    }
                    DashboardTab::NetworkMap => network_map_view(ui, &snapshot),
                    DashboardTab::Optimization => {
                        optimization_view(ui, &snapshot.optimization, &mut form, &simulation)
                    }
                });
        });
}
