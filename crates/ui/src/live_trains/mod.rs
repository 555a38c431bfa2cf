//! Live Trains tab: one row per train, with a detail card for the selection.

mod train_card;

use bevy::prelude::*;
use bevy_egui::egui;

use operations::metrics::TrainStatusCounts;
use operations::records::Train;

use crate::{theme, widgets};

pub use train_card::{detail_fields, location_text};

/// Train whose detail card is open.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SelectedTrain(pub Option<&'static str>);

impl SelectedTrain {
    /// Clicking the open train closes its card; clicking another switches to it.
    pub fn toggle(&mut self, id: &'static str) {
        self.0 = if self.0 == Some(id) { None } else { Some(id) };
    }

    pub fn find<'a>(&self, trains: &'a [Train]) -> Option<&'a Train> {
        let id = self.0?;
        trains.iter().find(|t| t.id == id)
    }
}

/// Detail cards do not survive a trip through standby.
pub fn clear_selected_train(mut selected: ResMut<SelectedTrain>) {
    selected.0 = None;
}

pub fn live_trains_view(ui: &mut egui::Ui, trains: &[Train], selected: &mut SelectedTrain) {
    let counts = TrainStatusCounts::from_trains(trains);
    widgets::caption(
        ui,
        &format!(
            "{} trains: {} on-time, {} delayed, {} critical",
            counts.total, counts.on_time, counts.delayed, counts.critical
        ),
    );
    ui.add_space(theme::ITEM_SPACING * 2.0);

    ui.columns(2, |columns| {
        egui::ScrollArea::vertical()
            .id_salt("live_train_rows")
            .show(&mut columns[0], |ui| {
                for train in trains {
                    let open = selected.0 == Some(train.id);
                    if train_card::render_train_row(ui, train, open).clicked() {
                        selected.toggle(train.id);
                    }
                }
            });

        match selected.find(trains) {
            Some(train) => {
                if train_card::render_detail_card(&mut columns[1], train) {
                    selected.0 = None;
                }
            }
            None => widgets::caption(&mut columns[1], "Select a train to see its details"),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use operations::sample_data::TRAINS;

    #[test]
    fn test_selection_toggles() {
        let mut selected = SelectedTrain::default();
        selected.toggle("T002");
        assert_eq!(selected.0, Some("T002"));
        selected.toggle("T004");
        assert_eq!(selected.0, Some("T004"));
        selected.toggle("T004");
        assert_eq!(selected.0, None);
    }

    #[test]
    fn test_find_selected_train() {
        let selected = SelectedTrain(Some("T003"));
        let train = selected.find(&TRAINS).expect("T003 is in the sample");
        assert_eq!(train.name, "12622 Tamil Nadu Exp");
        assert!(SelectedTrain(Some("T999")).find(&TRAINS).is_none());
        assert!(SelectedTrain::default().find(&TRAINS).is_none());
    }
}
