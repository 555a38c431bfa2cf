//! Tab strip under the header.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use operations::tabs::{ActiveTab, DashboardTab};

use crate::theme;

/// "1 Overview" style caption with the digit shortcut.
pub fn tab_caption(index: usize, tab: DashboardTab) -> String {
    format!("{} {}", index + 1, tab.label())
}

pub fn tab_bar_ui(mut contexts: EguiContexts, mut active: ResMut<ActiveTab>) {
    egui::TopBottomPanel::top("railoptima_tabs")
        .frame(
            egui::Frame::new()
                .fill(theme::PANEL)
                .inner_margin(egui::Margin::symmetric(16, 6)),
        )
        .show(contexts.ctx_mut(), |ui| {
            ui.horizontal(|ui| {
                for (i, tab) in DashboardTab::ALL.iter().enumerate() {
                    let selected = active.0 == *tab;
                    let text = egui::RichText::new(tab_caption(i, *tab)).size(theme::FONT_BODY);
                    let text = if selected {
                        text.color(theme::TEXT_HEADING).strong()
                    } else {
                        text.color(theme::TEXT_MUTED)
                    };
                    if ui.selectable_label(selected, text).clicked() && !selected {
                        active.0 = *tab;
                    }
                }
            });
        });
}
