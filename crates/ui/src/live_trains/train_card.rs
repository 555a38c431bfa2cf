//! Train row and detail card rendering.

use bevy_egui::egui;

use operations::metrics::progress_tier;
use operations::records::Train;

use crate::theme;
use crate::widgets;

/// "Current: Gwalior Jn".
pub fn location_text(train: &Train) -> String {
    format!("Current: {}", train.location)
}

/// Label/value pairs for the detail card. Optional fields are omitted when absent.
pub fn detail_fields(train: &Train) -> Vec<(&'static str, String)> {
    let mut fields = vec![
        ("Train ID", train.id.to_string()),
        ("Status", train.status.label()),
        ("Current", train.location.to_string()),
    ];
    if let Some(delay) = train.delay_text() {
        fields.push(("Delay", delay));
    }
    if let Some(platform) = train.platform {
        fields.push(("Platform", platform.to_string()));
    }
    if let Some(next) = train.next_station {
        fields.push(("Next", next.to_string()));
    }
    fields.push(("Journey Progress", format!("{}%", train.progress_percent())));
    if let Some(eta) = train.eta {
        fields.push(("Est. Arrival", eta.to_string()));
    }
    fields
}

/// One clickable train row.
pub fn render_train_row(ui: &mut egui::Ui, train: &Train, open: bool) -> egui::Response {
    let presentation = train.status.presentation();
    let border = if open { theme::PRIMARY } else { theme::CARD_BORDER };
    let response = egui::Frame::new()
        .fill(theme::CARD)
        .stroke(egui::Stroke::new(1.0, border))
        .corner_radius(egui::CornerRadius::same(theme::CARD_CORNER_RADIUS))
        .inner_margin(egui::Margin::same(10))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(train.name)
                        .size(theme::FONT_HEADING)
                        .color(theme::TEXT_HEADING)
                        .strong(),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    widgets::status_badge(ui, presentation, &train.status.label());
                });
            });
            ui.horizontal(|ui| {
                widgets::caption(ui, &location_text(train));
                if let Some(delay) = train.delay_text() {
                    ui.label(
                        egui::RichText::new(delay)
                            .size(theme::FONT_SMALL)
                            .color(theme::WARNING),
                    );
                }
            });
            let tier = progress_tier(train.status);
            widgets::percent_bar(ui, train.progress_percent(), theme::tier_color(tier));
        })
        .response;
    ui.add_space(theme::ITEM_SPACING);
    response.interact(egui::Sense::click())
}

/// Detail card for the selected train. Returns true when closed.
pub fn render_detail_card(ui: &mut egui::Ui, train: &Train) -> bool {
    let mut close = false;
    widgets::card(ui, |ui| {
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(train.name)
                    .size(theme::FONT_HEADING)
                    .color(theme::TEXT_HEADING)
                    .strong(),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                close = ui.small_button("x").clicked();
            });
        });
        widgets::status_badge(ui, train.status.presentation(), &train.status.label());
        ui.add_space(theme::ITEM_SPACING);
        for (label, value) in detail_fields(train) {
            widgets::stat_row(ui, label, &value, None);
        }
        let tier = progress_tier(train.status);
        widgets::percent_bar(ui, train.progress_percent(), theme::tier_color(tier));
    });
    close
}
