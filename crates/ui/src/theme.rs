use bevy_egui::{egui, EguiContexts};

use operations::status::StatusTier;

// =============================================================================
// Palette
// =============================================================================

pub const PANEL: egui::Color32 = egui::Color32::from_rgb(24, 28, 38);
pub const CARD: egui::Color32 = egui::Color32::from_rgb(32, 37, 50);
pub const CARD_BORDER: egui::Color32 = egui::Color32::from_rgb(52, 60, 78);
pub const CANVAS: egui::Color32 = egui::Color32::from_rgb(28, 33, 45);

pub const PRIMARY: egui::Color32 = egui::Color32::from_rgb(70, 140, 230);
pub const SUCCESS: egui::Color32 = egui::Color32::from_rgb(70, 200, 120);
pub const WARNING: egui::Color32 = egui::Color32::from_rgb(235, 175, 50);
pub const DANGER: egui::Color32 = egui::Color32::from_rgb(235, 70, 70);
pub const MUTED: egui::Color32 = egui::Color32::from_rgb(130, 138, 155);

pub const TEXT: egui::Color32 = egui::Color32::from_rgb(220, 224, 232);
pub const TEXT_HEADING: egui::Color32 = egui::Color32::WHITE;
pub const TEXT_MUTED: egui::Color32 = egui::Color32::from_rgb(140, 148, 165);

// =============================================================================
// Sizes
// =============================================================================

pub const FONT_TITLE: f32 = 26.0;
pub const FONT_KPI: f32 = 22.0;
pub const FONT_HEADING: f32 = 16.0;
pub const FONT_BODY: f32 = 13.0;
pub const FONT_SMALL: f32 = 11.0;

pub const CARD_CORNER_RADIUS: u8 = 8;
pub const WIDGET_CORNER_RADIUS: u8 = 6;
pub const ITEM_SPACING: f32 = 6.0;

/// Fill color for a status tier.
pub fn tier_color(tier: StatusTier) -> egui::Color32 {
    match tier {
        StatusTier::Success => SUCCESS,
        StatusTier::Warning => WARNING,
        StatusTier::Danger => DANGER,
        StatusTier::Muted => MUTED,
    }
}

/// Same hue at low alpha, for bar tracks and row backgrounds.
pub fn tier_tint(tier: StatusTier) -> egui::Color32 {
    let c = tier_color(tier);
    egui::Color32::from_rgba_unmultiplied(c.r(), c.g(), c.b(), 48)
}

pub fn apply_console_theme(mut contexts: EguiContexts) {
    let ctx = contexts.ctx_mut();
    let mut style = (*ctx.style()).clone();

    let inactive = egui::Color32::from_rgb(44, 50, 66);
    let hover = egui::Color32::from_rgb(60, 70, 92);

    style.visuals.widgets.noninteractive.bg_fill = PANEL;
    style.visuals.widgets.inactive.bg_fill = inactive;
    style.visuals.widgets.hovered.bg_fill = hover;
    style.visuals.widgets.active.bg_fill = PRIMARY;
    style.visuals.widgets.inactive.weak_bg_fill = inactive;
    style.visuals.widgets.hovered.weak_bg_fill = hover;
    style.visuals.widgets.active.weak_bg_fill = PRIMARY;

    style.visuals.window_fill = PANEL;
    style.visuals.panel_fill = PANEL;
    style.visuals.extreme_bg_color = egui::Color32::from_rgb(18, 21, 29);
    style.visuals.faint_bg_color = CARD;

    style.visuals.selection.bg_fill = PRIMARY;
    style.visuals.selection.stroke = egui::Stroke::new(1.0, PRIMARY);

    let widget_rounding = egui::CornerRadius::same(WIDGET_CORNER_RADIUS);
    style.visuals.window_corner_radius = egui::CornerRadius::same(CARD_CORNER_RADIUS);
    style.visuals.widgets.noninteractive.corner_radius = widget_rounding;
    style.visuals.widgets.inactive.corner_radius = widget_rounding;
    style.visuals.widgets.hovered.corner_radius = widget_rounding;
    style.visuals.widgets.active.corner_radius = widget_rounding;

    style.spacing.item_spacing = egui::vec2(8.0, ITEM_SPACING);

    ctx.set_style(style);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_colors_distinct() {
        let tiers = [
            StatusTier::Success,
            StatusTier::Warning,
            StatusTier::Danger,
            StatusTier::Muted,
        ];
        for (i, a) in tiers.iter().enumerate() {
            for b in &tiers[i + 1..] {
                assert_ne!(tier_color(*a), tier_color(*b), "{a:?} vs {b:?}");
            }
        }
    }

    #[test]
    fn test_tint_is_translucent() {
        assert!(tier_tint(StatusTier::Danger).a() < 255);
    }
}
