//! Lock screen shown while the console is in standby.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use operations::app_state::ConsoleState;

use crate::header::{SUBTITLE, TITLE};
use crate::theme;

pub fn standby_ui(mut contexts: EguiContexts, mut next_state: ResMut<NextState<ConsoleState>>) {
    egui::CentralPanel::default()
        .frame(egui::Frame::new().fill(theme::PANEL))
        .show(contexts.ctx_mut(), |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(ui.available_height() * 0.35);
                ui.label(
                    egui::RichText::new(TITLE)
                        .size(theme::FONT_TITLE * 1.5)
                        .color(theme::PRIMARY)
                        .strong(),
                );
                ui.label(
                    egui::RichText::new(SUBTITLE)
                        .size(theme::FONT_HEADING)
                        .color(theme::TEXT_MUTED),
                );
                ui.add_space(24.0);
                let button = egui::Button::new(
                    egui::RichText::new("Open Dashboard")
                        .size(theme::FONT_HEADING)
                        .color(egui::Color32::WHITE),
                )
                .fill(theme::PRIMARY)
                .min_size(egui::vec2(180.0, 36.0));
                if ui.add(button).clicked() {
                    next_state.set(ConsoleState::Dashboard);
                }
                ui.add_space(8.0);
                ui.label(
                    egui::RichText::new("Press Esc to toggle standby")
                        .size(theme::FONT_SMALL)
                        .color(theme::TEXT_MUTED),
                );
            });
        });
}
