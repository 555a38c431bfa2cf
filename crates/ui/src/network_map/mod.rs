//! Network Map tab: stations and trains placed on a schematic canvas.
//!
//! Positions are the pre-assigned percentages stored on each record; nothing
//! here is geographic. Hovering a marker shows a tooltip; the "Center View"
//! and "Auto-Update" buttons are placeholders with no behavior.

mod drawing;
pub mod layout;
mod tests;

use bevy::log::debug;
use bevy_egui::egui;

use operations::records::NetworkSnapshot;

use crate::{theme, widgets};

pub use layout::{
    dash_segments, hit_test, station_tooltip, to_canvas, train_tooltip, MapHover, MapStats,
    LEGEND,
};

const CANVAS_HEIGHT: f32 = 384.0;

pub fn network_map_view(ui: &mut egui::Ui, snapshot: &NetworkSnapshot) {
    widgets::card(ui, |ui| {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                widgets::card_header(
                    ui,
                    "[=]",
                    "Railway Network Map",
                    Some("Real-time visualization of railway operations"),
                );
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                if render_map_controls(ui).any_clicked() {
                    debug!("Map view controls have no effect on the static layout");
                }
            });
        });

        let size = egui::vec2(ui.available_width(), CANVAS_HEIGHT);
        let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
        let rect = response.rect;

        drawing::draw_canvas(&painter, rect);
        drawing::draw_links(&painter, rect, &snapshot.links);
        drawing::draw_stations(&painter, rect, &snapshot.stations);
        drawing::draw_trains(&painter, rect, &snapshot.trains);
        drawing::draw_legend(&painter, rect);

        if let Some(pointer) = response.hover_pos() {
            if let Some(hover) = hit_test(pointer, rect, snapshot) {
                let (title, detail) = match hover {
                    MapHover::Station(i) => {
                        let s = &snapshot.stations[i];
                        (s.name, station_tooltip(s))
                    }
                    MapHover::Train(i) => {
                        let t = &snapshot.trains[i];
                        (t.name, train_tooltip(t))
                    }
                };
                response.on_hover_ui_at_pointer(|ui| {
                    ui.label(egui::RichText::new(title).strong());
                    widgets::caption(ui, &detail);
                });
            }
        }

        ui.add_space(theme::ITEM_SPACING * 2.0);
        render_stats(ui, &MapStats::from_snapshot(snapshot));
    });
}

/// Responses of the placeholder map buttons.
pub struct MapControls {
    pub auto_update: egui::Response,
    pub center_view: egui::Response,
}

impl MapControls {
    pub fn any_clicked(&self) -> bool {
        self.auto_update.clicked() || self.center_view.clicked()
    }
}

/// Both buttons are added every frame, whichever one was clicked.
pub fn render_map_controls(ui: &mut egui::Ui) -> MapControls {
    let auto_update = ui
        .button("Auto-Update")
        .on_hover_text("Positions are static in this build");
    let center_view = ui.button("Center View");
    MapControls {
        auto_update,
        center_view,
    }
}

fn render_stats(ui: &mut egui::Ui, stats: &MapStats) {
    let cells = [
        (stats.stations, "Active Stations", theme::PRIMARY),
        (stats.on_time, "On Time", theme::SUCCESS),
        (stats.delayed, "Delayed", theme::WARNING),
        (stats.critical, "Critical", theme::DANGER),
    ];
    ui.columns(cells.len(), |columns| {
        for (ui, (value, label, color)) in columns.iter_mut().zip(cells) {
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(value.to_string())
                        .size(theme::FONT_KPI)
                        .color(color)
                        .strong(),
                );
                widgets::caption(ui, label);
            });
        }
    });
}
