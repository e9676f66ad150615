//! Input bar component
//!
//! Provides the mic control, text input, and send button.

use crate::ui::state::AppState;
use crate::ui::theme::Theme;
use crate::voice::CaptureState;
use egui::{self, Key, RichText, Vec2};

/// Input bar component for text and voice input
pub struct InputBar<'a> {
    state: &'a mut AppState,
    theme: &'a Theme,
}

impl<'a> InputBar<'a> {
    pub fn new(state: &'a mut AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    pub fn show(mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if self.state.has_voice() {
                self.show_mic_button(ui);
            }

            self.show_text_input(ui);
            self.show_send_button(ui);
        });
    }

    fn show_mic_button(&mut self, ui: &mut egui::Ui) {
        let recording = self.state.recording_state() == CaptureState::Recording;

        let (icon, label, hint, color) = if recording {
            ("⏹", "Stop recording", "Tap to send", self.theme.recording)
        } else {
            ("🎤", "Record voice message", "Tap to record", self.theme.text_primary)
        };

        let button = egui::Button::new(RichText::new(icon).size(18.0).color(color))
            .min_size(Vec2::splat(40.0))
            .rounding(self.theme.input_rounding);
        let button = if recording {
            button.fill(self.theme.recording.gamma_multiply(0.2))
        } else {
            button.fill(self.theme.bg_input)
        };

        let response = ui.add(button);
        response.widget_info(|| egui::WidgetInfo::labeled(egui::WidgetType::Button, true, label));

        if response.clicked() {
            self.state.press_mic();
        }

        response.on_hover_text(hint);
    }

    fn show_text_input(&mut self, ui: &mut egui::Ui) {
        // Reserve space for the send button
        let available_width = (ui.available_width() - 72.0).max(80.0);

        let text_edit = egui::TextEdit::singleline(&mut self.state.input_text)
            .hint_text("Type your message...")
            .desired_width(available_width)
            .font(egui::TextStyle::Body)
            .margin(egui::Margin::symmetric(14.0, 8.0))
            .id(egui::Id::new("message_input"));

        let response = ui.add(text_edit);
        response.widget_info(|| {
            egui::WidgetInfo::labeled(egui::WidgetType::TextEdit, true, "Message input")
        });

        // Singleline edits give up focus on Enter
        if response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
            self.state.send_message();
            response.request_focus();
        }
    }

    fn show_send_button(&mut self, ui: &mut egui::Ui) {
        let button = egui::Button::new(RichText::new("Send").color(egui::Color32::WHITE))
            .min_size(Vec2::new(60.0, 36.0))
            .rounding(self.theme.input_rounding)
            .fill(self.theme.primary);

        let response = ui.add(button);
        response.widget_info(|| {
            egui::WidgetInfo::labeled(egui::WidgetType::Button, true, "Send message")
        });

        if response.clicked() {
            self.state.send_message();
        }

        response.on_hover_text("Send message (Enter)");
    }
}
