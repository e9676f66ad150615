//! Theme and styling for the chat screen

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Vec2, Visuals};

/// Chat screen theme
#[derive(Clone, Debug)]
pub struct Theme {
    /// Accent used by the send button and user bubbles
    pub primary: Color32,

    /// Background colors
    pub bg_primary: Color32,
    pub bg_input: Color32,

    /// Bubble fills
    pub user_bubble: Color32,
    pub assistant_bubble: Color32,

    /// Text colors
    pub text_primary: Color32,
    pub text_muted: Color32,

    /// Mic control while recording
    pub recording: Color32,

    pub bubble_rounding: Rounding,
    pub input_rounding: Rounding,

    /// Standard spacing
    pub spacing: f32,
    /// Small spacing
    pub spacing_sm: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Create the dark theme
    pub fn dark() -> Self {
        Self {
            primary: Color32::from_rgb(37, 99, 235), // Blue

            bg_primary: Color32::from_rgb(2, 6, 23), // Near black
            bg_input: Color32::from_rgb(17, 24, 39), // Dark gray

            user_bubble: Color32::from_rgb(37, 99, 235),
            assistant_bubble: Color32::from_rgb(17, 24, 39),

            text_primary: Color32::WHITE,
            text_muted: Color32::from_rgb(156, 163, 175), // Medium gray

            recording: Color32::from_rgb(239, 68, 68), // Red

            bubble_rounding: Rounding::same(14.0),
            input_rounding: Rounding::same(20.0),

            spacing: 16.0,
            spacing_sm: 8.0,
        }
    }

    /// Apply this theme to egui
    pub fn apply(&self, ctx: &egui::Context) {
        let mut visuals = Visuals::dark();

        visuals.panel_fill = self.bg_primary;
        visuals.window_fill = self.bg_input;
        visuals.extreme_bg_color = self.bg_input;

        visuals.widgets.inactive.bg_fill = self.bg_input;
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, self.text_primary);

        visuals.widgets.hovered.bg_fill = self.primary.gamma_multiply(0.8);
        visuals.widgets.active.bg_fill = self.primary;

        visuals.selection.bg_fill = self.primary.gamma_multiply(0.3);
        visuals.selection.stroke = Stroke::new(1.0, self.primary);

        visuals.window_rounding = self.bubble_rounding;

        ctx.set_visuals(visuals);

        let mut style = (*ctx.style()).clone();
        style.spacing.item_spacing = Vec2::splat(self.spacing_sm);
        style.text_styles.insert(
            egui::TextStyle::Body,
            FontId::new(14.0, FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Small,
            FontId::new(10.0, FontFamily::Proportional),
        );
        ctx.set_style(style);
    }
}
