//! Unit tests for the network map layout helpers and controls.

#[cfg(test)]
mod tests {
    use bevy_egui::egui;

    use operations::records::{MapPosition, NetworkSnapshot};
    use operations::status::StatusTier;

    use crate::network_map::layout::{
        dash_segments, hit_test, station_tooltip, to_canvas, train_tooltip, MapHover, MapStats,
        LEGEND,
    };
    use crate::network_map::render_map_controls;

    fn canvas() -> egui::Rect {
        egui::Rect::from_min_size(egui::pos2(100.0, 50.0), egui::vec2(400.0, 200.0))
    }

    #[test]
    fn test_to_canvas_maps_percentages() {
        let rect = canvas();
        assert_eq!(to_canvas(MapPosition::new(0.0, 0.0), rect), rect.left_top());
        assert_eq!(to_canvas(MapPosition::new(100.0, 100.0), rect), rect.right_bottom());
        assert_eq!(
            to_canvas(MapPosition::new(25.0, 50.0), rect),
            egui::pos2(200.0, 150.0)
        );
    }

    #[test]
    fn test_to_canvas_clamps_out_of_range() {
        let rect = canvas();
        assert_eq!(to_canvas(MapPosition::new(-10.0, 140.0), rect), rect.left_bottom());
    }

    #[test]
    fn test_dash_segments_cover_line() {
        let segments = dash_segments(egui::pos2(0.0, 0.0), egui::pos2(22.0, 0.0), 5.0, 5.0);
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0], [egui::pos2(0.0, 0.0), egui::pos2(5.0, 0.0)]);
        assert_eq!(segments[2], [egui::pos2(20.0, 0.0), egui::pos2(22.0, 0.0)]);
    }

    #[test]
    fn test_dash_segments_degenerate() {
        let p = egui::pos2(3.0, 3.0);
        assert!(dash_segments(p, p, 5.0, 5.0).is_empty());
        assert!(dash_segments(p, egui::pos2(10.0, 3.0), 0.0, 5.0).is_empty());
    }

    #[test]
    fn test_tooltips() {
        let snapshot = NetworkSnapshot::default();
        assert_eq!(station_tooltip(&snapshot.stations[1]), "15 trains \u{2022} normal");
        assert_eq!(train_tooltip(&snapshot.trains[0]), "Status: On-time");
        assert_eq!(train_tooltip(&snapshot.trains[3]), "Status: Critical");
    }

    #[test]
    fn test_hit_test_finds_markers() {
        let snapshot = NetworkSnapshot::default();
        let rect = canvas();
        let station = to_canvas(snapshot.stations[2].position, rect);
        assert_eq!(hit_test(station, rect, &snapshot), Some(MapHover::Station(2)));
        let train = to_canvas(snapshot.trains[1].position, rect);
        assert_eq!(hit_test(train, rect, &snapshot), Some(MapHover::Train(1)));
        assert_eq!(hit_test(rect.left_top() + egui::vec2(1.0, 1.0), rect, &snapshot), None);
        assert_eq!(hit_test(egui::pos2(0.0, 0.0), rect, &snapshot), None);
    }

    #[test]
    fn test_stats_from_sample() {
        let stats = MapStats::from_snapshot(&NetworkSnapshot::default());
        assert_eq!(
            stats,
            MapStats {
                stations: 5,
                on_time: 2,
                delayed: 1,
                critical: 1,
            }
        );
    }

    #[test]
    fn test_legend_covers_non_muted_tiers() {
        let tiers: Vec<_> = LEGEND.iter().map(|(_, t)| *t).collect();
        assert_eq!(
            tiers,
            [StatusTier::Success, StatusTier::Warning, StatusTier::Danger]
        );
    }

    /// One frame of the control row; returns (auto clicked, any clicked, auto rect, center rect).
    fn controls_frame(
        ctx: &egui::Context,
        events: Vec<egui::Event>,
    ) -> (bool, bool, egui::Rect, egui::Rect) {
        let mut out = None;
        let input = egui::RawInput {
            events,
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let controls = render_map_controls(ui);
                    out = Some((
                        controls.auto_update.clicked(),
                        controls.any_clicked(),
                        controls.auto_update.rect,
                        controls.center_view.rect,
                    ));
                });
            });
        });
        out.expect("control row rendered")
    }

    fn primary(pos: egui::Pos2, pressed: bool) -> egui::Event {
        egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: egui::Modifiers::NONE,
        }
    }

    #[test]
    fn test_center_view_stays_laid_out_when_auto_update_clicked() {
        let ctx = egui::Context::default();
        let (_, _, auto_rect, center_rect) = controls_frame(&ctx, Vec::new());
        assert!(center_rect.is_positive());

        let target = auto_rect.center();
        controls_frame(&ctx, vec![egui::Event::PointerMoved(target), primary(target, true)]);
        let (auto_clicked, any_clicked, _, center_after) =
            controls_frame(&ctx, vec![primary(target, false)]);

        assert!(auto_clicked);
        assert!(any_clicked);
        assert!(center_after.is_positive());
        assert_eq!(center_after, center_rect);
    }
}
