//! Modal alert for capture problems (e.g. microphone permission)

use crate::ui::state::AppState;
use crate::ui::theme::Theme;
use egui::{self, Align2, RichText};

pub struct AlertDialog<'a> {
    state: &'a mut AppState,
    theme: &'a Theme,
}

impl<'a> AlertDialog<'a> {
    pub fn new(state: &'a mut AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    pub fn show(self, ctx: &egui::Context) {
        let Some(alert) = self.state.alert.clone() else {
            return;
        };

        let mut dismissed = false;
        egui::Window::new(&alert.title)
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(RichText::new(&alert.message).color(self.theme.text_primary));
                ui.add_space(self.theme.spacing_sm);
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });

        if dismissed {
            self.state.dismiss_alert();
        }
    }
}
