//! Top header bar: title, system time and the simulate toggle.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use operations::clock::LiveClock;
use operations::controls::SimulationToggle;
use operations::settings::DashboardSettings;

use crate::theme;

pub const TITLE: &str = "RailOptima";
pub const SUBTITLE: &str = "Railway Operations Control Center";

/// Placeholder shown before the first clock reading exists.
pub const CLOCK_PLACEHOLDER: &str = "--:--:--";

/// Clock readout for the header.
pub fn clock_text(clock: Option<&LiveClock>, twenty_four_hour: bool) -> String {
    match clock {
        Some(clock) => clock.formatted(twenty_four_hour),
        None => CLOCK_PLACEHOLDER.to_string(),
    }
}

pub fn header_ui(
    mut contexts: EguiContexts,
    clock: Option<Res<LiveClock>>,
    settings: Res<DashboardSettings>,
    mut simulation: ResMut<SimulationToggle>,
) {
    let time = clock_text(clock.as_deref(), settings.twenty_four_hour_clock);

    egui::TopBottomPanel::top("railoptima_header")
        .frame(
            egui::Frame::new()
                .fill(theme::PANEL)
                .inner_margin(egui::Margin::symmetric(16, 10)),
        )
        .show(contexts.ctx_mut(), |ui| {
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(
                        egui::RichText::new(TITLE)
                            .size(theme::FONT_TITLE)
                            .color(theme::PRIMARY)
                            .strong(),
                    );
                    ui.label(
                        egui::RichText::new(SUBTITLE)
                            .size(theme::FONT_BODY)
                            .color(theme::TEXT_MUTED),
                    );
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let settings_button = ui
                        .button("Settings")
                        .on_hover_text("Settings are read from the config file at startup");
                    if settings_button.clicked() {
                        debug!("Settings button pressed; settings are file-based");
                    }

                    let label = simulation.button_label();
                    let fill = if simulation.is_simulating() {
                        theme::WARNING
                    } else {
                        theme::PRIMARY
                    };
                    let button = egui::Button::new(
                        egui::RichText::new(label).color(egui::Color32::WHITE).strong(),
                    )
                    .fill(fill);
                    if ui.add(button).clicked() {
                        simulation.toggle();
                        info!("Simulation toggle set to {}", simulation.is_simulating());
                    }

                    ui.add_space(12.0);
                    ui.vertical(|ui| {
                        ui.label(
                            egui::RichText::new("System Time")
                                .size(theme::FONT_SMALL)
                                .color(theme::TEXT_MUTED),
                        );
                        ui.label(
                            egui::RichText::new(time)
                                .size(theme::FONT_HEADING)
                                .color(theme::TEXT_HEADING)
                                .monospace(),
                        );
                    });
                });
            });
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    #[test]
    fn test_clock_text_placeholder_without_clock() {
        assert_eq!(clock_text(None, false), "--:--:--");
        assert_eq!(clock_text(None, true), "--:--:--");
    }

    #[test]
    fn test_clock_text_formats_reading() {
        let now = Local.with_ymd_and_hms(2024, 3, 1, 14, 5, 9).unwrap();
        let clock = LiveClock::new(1.0, now);
        assert_eq!(clock_text(Some(&clock), true), "14:05:09");
        assert_eq!(clock_text(Some(&clock), false), "2:05:09 PM");
    }
}
