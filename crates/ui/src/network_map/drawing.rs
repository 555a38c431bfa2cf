//! Painter calls for the network map canvas.

use bevy_egui::egui;

use operations::records::{LinkKind, MapLink, Station, Train};

use super::layout::{
    dash_segments, to_canvas, DASH_GAP, DASH_LENGTH, LEGEND, STATION_RADIUS, TRAIN_MARKER_SIZE,
};
use crate::theme;

const GRID_STEP: f32 = 24.0;

pub fn draw_canvas(painter: &egui::Painter, rect: egui::Rect) {
    painter.rect_filled(rect, 8.0, theme::CANVAS);
    let grid = egui::Stroke::new(1.0, egui::Color32::from_white_alpha(8));
    let mut x = rect.left() + GRID_STEP;
    while x < rect.right() {
        painter.line_segment([egui::pos2(x, rect.top()), egui::pos2(x, rect.bottom())], grid);
        x += GRID_STEP;
    }
    let mut y = rect.top() + GRID_STEP;
    while y < rect.bottom() {
        painter.line_segment([egui::pos2(rect.left(), y), egui::pos2(rect.right(), y)], grid);
        y += GRID_STEP;
    }
    painter.rect_stroke(
        rect,
        8.0,
        egui::Stroke::new(1.0, theme::CARD_BORDER),
        egui::StrokeKind::Inside,
    );
}

pub fn draw_links(painter: &egui::Painter, rect: egui::Rect, links: &[MapLink]) {
    for link in links {
        let from = to_canvas(link.from, rect);
        let to = to_canvas(link.to, rect);
        match link.kind {
            LinkKind::Trunk => {
                let stroke = egui::Stroke::new(2.0, theme::PRIMARY.gamma_multiply(0.6));
                painter.line_segment([from, to], stroke);
            }
            LinkKind::Connection => {
                let stroke = egui::Stroke::new(1.5, theme::PRIMARY.gamma_multiply(0.4));
                for segment in dash_segments(from, to, DASH_LENGTH, DASH_GAP) {
                    painter.line_segment(segment, stroke);
                }
            }
        }
    }
}

pub fn draw_stations(painter: &egui::Painter, rect: egui::Rect, stations: &[Station]) {
    for station in stations {
        let center = to_canvas(station.position, rect);
        let color = theme::tier_color(station.status.presentation().tier);
        painter.circle(
            center,
            STATION_RADIUS,
            color,
            egui::Stroke::new(2.0, theme::PANEL),
        );
        painter.text(
            center + egui::vec2(0.0, STATION_RADIUS + 4.0),
            egui::Align2::CENTER_TOP,
            station.name,
            egui::FontId::proportional(theme::FONT_SMALL),
            theme::TEXT,
        );
    }
}

pub fn draw_trains(painter: &egui::Painter, rect: egui::Rect, trains: &[Train]) {
    for train in trains {
        let center = to_canvas(train.position, rect);
        let marker = egui::Rect::from_center_size(center, TRAIN_MARKER_SIZE);
        let color = theme::tier_color(train.status.presentation().tier);
        painter.rect_filled(marker, 3.0, color);
        painter.rect_stroke(
            marker,
            3.0,
            egui::Stroke::new(1.0, theme::PANEL),
            egui::StrokeKind::Outside,
        );
        painter.text(
            center,
            egui::Align2::CENTER_CENTER,
            "T",
            egui::FontId::monospace(theme::FONT_SMALL),
            egui::Color32::WHITE,
        );
    }
}

/// Legend box in the bottom-right corner of the canvas.
pub fn draw_legend(painter: &egui::Painter, rect: egui::Rect) {
    let size = egui::vec2(150.0, 78.0);
    let min = rect.right_bottom() - size - egui::vec2(12.0, 12.0);
    let legend = egui::Rect::from_min_size(min, size);
    painter.rect_filled(legend, 6.0, theme::CARD);
    painter.rect_stroke(
        legend,
        6.0,
        egui::Stroke::new(1.0, theme::CARD_BORDER),
        egui::StrokeKind::Inside,
    );
    let mut cursor = legend.left_top() + egui::vec2(10.0, 8.0);
    painter.text(
        cursor,
        egui::Align2::LEFT_TOP,
        "Legend",
        egui::FontId::proportional(theme::FONT_SMALL),
        theme::TEXT_HEADING,
    );
    for (label, tier) in LEGEND {
        cursor.y += 16.0;
        painter.circle_filled(cursor + egui::vec2(5.0, 6.0), 5.0, theme::tier_color(tier));
        painter.text(
            cursor + egui::vec2(16.0, 0.0),
            egui::Align2::LEFT_TOP,
            label,
            egui::FontId::proportional(theme::FONT_SMALL),
            theme::TEXT,
        );
    }
}
