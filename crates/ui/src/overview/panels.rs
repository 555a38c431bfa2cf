//! Rendering for the overview cards.

use bevy_egui::egui;

use operations::records::{Alert, KpiCard};

use super::types::{alert_summary, CapacityRow};
use crate::theme;
use crate::widgets;

// =============================================================================
// KPIs
// =============================================================================

pub fn render_kpi_cards(ui: &mut egui::Ui, kpis: &[KpiCard]) {
    if kpis.is_empty() {
        return;
    }
    ui.columns(kpis.len(), |columns| {
        for (ui, kpi) in columns.iter_mut().zip(kpis) {
            render_kpi_card(ui, kpi);
        }
    });
}

fn render_kpi_card(ui: &mut egui::Ui, kpi: &KpiCard) {
    widgets::card(ui, |ui| {
        ui.label(
            egui::RichText::new(kpi.title)
                .size(theme::FONT_BODY)
                .color(theme::TEXT_MUTED),
        );
        ui.label(
            egui::RichText::new(kpi.value)
                .size(theme::FONT_KPI)
                .color(theme::TEXT_HEADING)
                .strong(),
        );
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(kpi.delta)
                    .size(theme::FONT_SMALL)
                    .color(theme::tier_color(kpi.delta_tier))
                    .strong(),
            );
            widgets::caption(ui, kpi.caption);
        });
    });
}

// =============================================================================
// Alerts
// =============================================================================

pub fn render_alerts(ui: &mut egui::Ui, alerts: &[Alert]) {
    widgets::card(ui, |ui| {
        widgets::card_header(ui, "[!]", "Recent Alerts", Some(alert_summary(alerts).as_str()));
        if alerts.is_empty() {
            widgets::caption(ui, "No active alerts");
            return;
        }
        for alert in alerts {
            render_alert_row(ui, alert);
        }
    });
}

fn render_alert_row(ui: &mut egui::Ui, alert: &Alert) {
    let presentation = alert.severity.presentation();
    let stripe = theme::tier_color(presentation.tier);
    egui::Frame::new()
        .fill(theme::tier_tint(presentation.tier))
        .corner_radius(egui::CornerRadius::same(theme::WIDGET_CORNER_RADIUS))
        .inner_margin(egui::Margin::symmetric(8, 6))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                let (rect, _) =
                    ui.allocate_exact_size(egui::vec2(3.0, 34.0), egui::Sense::hover());
                ui.painter().rect_filled(rect, 1.0, stripe);
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        widgets::status_badge(ui, presentation, &alert.severity.label());
                        widgets::caption(ui, alert.time);
                    });
                    ui.label(
                        egui::RichText::new(alert.message)
                            .size(theme::FONT_BODY)
                            .color(theme::TEXT),
                    );
                });
            });
        });
    ui.add_space(4.0);
}

// =============================================================================
// Station capacity
// =============================================================================

pub fn render_capacity(ui: &mut egui::Ui, rows: &[CapacityRow]) {
    widgets::card(ui, |ui| {
        widgets::card_header(
            ui,
            "[#]",
            "Station Capacity",
            Some("Current utilization across major stations"),
        );
        for row in rows {
            widgets::stat_row(
                ui,
                row.name,
                &row.occupancy,
                Some(theme::tier_color(row.tier)),
            );
            widgets::percent_bar(ui, row.utilization, theme::tier_color(row.tier))
                .on_hover_text(format!("{}% utilization", row.utilization));
            ui.add_space(theme::ITEM_SPACING);
        }
    });
}
