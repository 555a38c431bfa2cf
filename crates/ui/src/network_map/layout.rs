//! Pure geometry and text for the network map.

use bevy_egui::egui;

use operations::metrics::TrainStatusCounts;
use operations::records::{MapPosition, NetworkSnapshot, Station, Train};
use operations::status::{StatusTier, TrainStatus};

pub const STATION_RADIUS: f32 = 7.0;
pub const TRAIN_MARKER_SIZE: egui::Vec2 = egui::vec2(18.0, 12.0);

pub const DASH_LENGTH: f32 = 5.0;
pub const DASH_GAP: f32 = 5.0;

/// Legend rows; each color covers a station status and a train status.
pub const LEGEND: [(&str, StatusTier); 3] = [
    ("Normal/On-time", StatusTier::Success),
    ("Busy/Delayed", StatusTier::Warning),
    ("Maintenance/Critical", StatusTier::Danger),
];

/// Map a percent position onto `rect`.
pub fn to_canvas(position: MapPosition, rect: egui::Rect) -> egui::Pos2 {
    let (fx, fy) = position.normalized();
    egui::pos2(
        rect.left() + fx * rect.width(),
        rect.top() + fy * rect.height(),
    )
}

/// Split `from`..`to` into dash segments; the last dash is cut at `to`.
pub fn dash_segments(
    from: egui::Pos2,
    to: egui::Pos2,
    dash: f32,
    gap: f32,
) -> Vec<[egui::Pos2; 2]> {
    let delta = to - from;
    let length = delta.length();
    if length <= f32::EPSILON || dash <= 0.0 {
        return Vec::new();
    }
    let dir = delta / length;
    let step = dash + gap.max(0.0);
    let mut segments = Vec::new();
    let mut start = 0.0;
    while start < length {
        let end = (start + dash).min(length);
        segments.push([from + dir * start, from + dir * end]);
        start += step;
    }
    segments
}

/// "15 trains • normal".
pub fn station_tooltip(station: &Station) -> String {
    format!("{} trains \u{2022} {}", station.trains, station.status.code())
}

/// "Status: On-time".
pub fn train_tooltip(train: &Train) -> String {
    format!("Status: {}", train.status.label())
}

/// Marker under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapHover {
    Station(usize),
    Train(usize),
}

/// Trains are drawn above stations, so they win ties.
pub fn hit_test(
    pointer: egui::Pos2,
    rect: egui::Rect,
    snapshot: &NetworkSnapshot,
) -> Option<MapHover> {
    if !rect.contains(pointer) {
        return None;
    }
    let train = snapshot.trains.iter().position(|t| {
        egui::Rect::from_center_size(to_canvas(t.position, rect), TRAIN_MARKER_SIZE)
            .contains(pointer)
    });
    if let Some(i) = train {
        return Some(MapHover::Train(i));
    }
    snapshot
        .stations
        .iter()
        .position(|s| to_canvas(s.position, rect).distance(pointer) <= STATION_RADIUS + 2.0)
        .map(MapHover::Station)
}

/// Counts shown under the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MapStats {
    pub stations: usize,
    pub on_time: usize,
    pub delayed: usize,
    pub critical: usize,
}

impl MapStats {
    pub fn from_snapshot(snapshot: &NetworkSnapshot) -> Self {
        let counts = TrainStatusCounts::from_trains(&snapshot.trains);
        Self {
            stations: snapshot.stations.len(),
            on_time: counts.get(TrainStatus::OnTime),
            delayed: counts.get(TrainStatus::Delayed),
            critical: counts.get(TrainStatus::Critical),
        }
    }
}
