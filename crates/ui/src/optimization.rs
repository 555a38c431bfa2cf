//! Optimization tab: last optimization summary and the scenario simulation form.
//!
//! Run, Reset and Start only log; no optimizer or simulator sits behind them.

use bevy::log::debug;
use bevy_egui::egui;

use operations::controls::{ScenarioForm, ScenarioKind, SimulationToggle};
use operations::records::OptimizationSummary;

use crate::{theme, widgets};

/// Label/value rows of the summary card.
pub fn summary_rows(summary: &OptimizationSummary) -> [(&'static str, String); 3] {
    [
        ("Last Optimization", summary.last_run.to_string()),
        ("Conflicts Resolved", summary.conflicts_resolved.to_string()),
        ("Time Saved", format!("{} minutes", summary.minutes_saved)),
    ]
}

pub fn optimization_view(
    ui: &mut egui::Ui,
    summary: &OptimizationSummary,
    form: &mut ScenarioForm,
    simulation: &SimulationToggle,
) {
    ui.columns(2, |columns| {
        render_summary(&mut columns[0], summary);
        render_scenario_form(&mut columns[1], form, simulation);
    });
}

fn render_summary(ui: &mut egui::Ui, summary: &OptimizationSummary) {
    widgets::card(ui, |ui| {
        widgets::card_header(
            ui,
            "[*]",
            "Schedule Optimization",
            Some("AI-powered route and timing optimization"),
        );
        for (i, (label, value)) in summary_rows(summary).iter().enumerate() {
            let color = (i > 0).then_some(theme::SUCCESS);
            widgets::stat_row(ui, label, value, color);
        }
        ui.add_space(12.0);
        let width = ui.available_width();
        let run = egui::Button::new(
            egui::RichText::new("Run Optimization").color(egui::Color32::WHITE),
        )
        .fill(theme::PRIMARY)
        .min_size(egui::vec2(width, 28.0));
        if ui.add(run).clicked() {
            debug!("Run Optimization pressed");
        }
        let reset = egui::Button::new("Reset to Default").min_size(egui::vec2(width, 28.0));
        if ui.add(reset).clicked() {
            debug!("Reset to Default pressed");
        }
    });
}

fn render_scenario_form(ui: &mut egui::Ui, form: &mut ScenarioForm, simulation: &SimulationToggle) {
    widgets::card(ui, |ui| {
        widgets::card_header(
            ui,
            "[>]",
            "Scenario Simulation",
            Some("Test different operational scenarios"),
        );

        ui.label(egui::RichText::new("Simulation Type").size(theme::FONT_BODY).strong());
        egui::ComboBox::from_id_salt("scenario_kind")
            .selected_text(form.kind.label())
            .width(ui.available_width())
            .show_ui(ui, |ui| {
                for kind in ScenarioKind::ALL {
                    ui.selectable_value(&mut form.kind, kind, kind.label());
                }
            });

        ui.add_space(theme::ITEM_SPACING);
        ui.label(egui::RichText::new("Duration (hours)").size(theme::FONT_BODY).strong());
        let mut hours = form.duration_hours;
        ui.add(
            egui::DragValue::new(&mut hours)
                .range(ScenarioForm::MIN_HOURS..=ScenarioForm::MAX_HOURS)
                .suffix(" h"),
        );
        form.set_duration(hours);

        ui.add_space(12.0);
        let start = egui::Button::new(
            egui::RichText::new(simulation.scenario_button_label()).color(egui::Color32::WHITE),
        )
        .fill(theme::PRIMARY)
        .min_size(egui::vec2(ui.available_width(), 28.0));
        if ui.add_enabled(!simulation.is_simulating(), start).clicked() {
            debug!(
                "Start Simulation pressed: {} for {}h",
                form.kind.label(),
                form.duration_hours
            );
        }
    });
}
