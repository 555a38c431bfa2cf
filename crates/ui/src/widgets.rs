//! Themed widget helpers shared by the dashboard views.
//!
//! These wrap the egui primitives the views are built from (card, badge,
//! progress bar, stat row) so every panel uses the palette in [`crate::theme`].

use bevy_egui::egui;

use operations::status::{Presentation, StatusTier};

use crate::theme;

// =============================================================================
// Card
// =============================================================================

/// Bordered card frame filling the available width.
pub fn card<R>(
    ui: &mut egui::Ui,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> egui::InnerResponse<R> {
    egui::Frame::new()
        .fill(theme::CARD)
        .stroke(egui::Stroke::new(1.0, theme::CARD_BORDER))
        .corner_radius(egui::CornerRadius::same(theme::CARD_CORNER_RADIUS))
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui)
        })
}

/// Card title with an optional one-line description underneath.
pub fn card_header(ui: &mut egui::Ui, glyph: &str, title: &str, description: Option<&str>) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(glyph).color(theme::PRIMARY).monospace());
        ui.label(
            egui::RichText::new(title)
                .size(theme::FONT_HEADING)
                .color(theme::TEXT_HEADING)
                .strong(),
        );
    });
    if let Some(description) = description {
        caption(ui, description);
    }
    ui.add_space(theme::ITEM_SPACING);
}

// =============================================================================
// Badge
// =============================================================================

/// "[+] On-time" style badge text.
pub fn badge_text(presentation: Presentation, label: &str) -> String {
    format!("{} {}", presentation.icon.glyph(), label)
}

/// Filled pill colored by tier, containing icon glyph and label.
pub fn status_badge(ui: &mut egui::Ui, presentation: Presentation, label: &str) -> egui::Response {
    let fill = theme::tier_color(presentation.tier);
    let text_color = match presentation.tier {
        StatusTier::Warning => egui::Color32::BLACK,
        _ => egui::Color32::WHITE,
    };
    egui::Frame::new()
        .fill(fill)
        .corner_radius(egui::CornerRadius::same(theme::WIDGET_CORNER_RADIUS))
        .inner_margin(egui::Margin::symmetric(6, 2))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(badge_text(presentation, label))
                    .size(theme::FONT_SMALL)
                    .color(text_color)
                    .strong(),
            );
        })
        .response
}

// =============================================================================
// Rows & bars
// =============================================================================

/// Label on the left, value on the right.
pub fn stat_row(ui: &mut egui::Ui, label: &str, value: &str, value_color: Option<egui::Color32>) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(label).size(theme::FONT_BODY).color(theme::TEXT));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                egui::RichText::new(value)
                    .size(theme::FONT_BODY)
                    .color(value_color.unwrap_or(theme::TEXT_MUTED))
                    .strong(),
            );
        });
    });
}

/// Full-width bar at `percent` (0..=100) filled with `color`.
pub fn percent_bar(ui: &mut egui::Ui, percent: u8, color: egui::Color32) -> egui::Response {
    ui.add(
        egui::ProgressBar::new(percent_fraction(percent))
            .fill(color)
            .desired_width(ui.available_width()),
    )
}

/// 0..=100 percentage as a 0..=1 fraction, clamped.
pub fn percent_fraction(percent: u8) -> f32 {
    f32::from(percent.min(100)) / 100.0
}

/// Muted small text line.
pub fn caption(ui: &mut egui::Ui, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .size(theme::FONT_SMALL)
            .color(theme::TEXT_MUTED),
    );
}
