//! Message list component
//!
//! Displays the conversation as chat bubbles, user messages on the right.

use crate::messages::Message;
use crate::ui::state::AppState;
use crate::ui::theme::Theme;
use egui::{self, Align, RichText};

/// Accessibility label for a message bubble
pub fn message_label(message: &Message) -> String {
    if message.is_user() {
        format!("User message: {}", message.content)
    } else {
        format!("Assistant response: {}", message.content)
    }
}

/// Message list component
pub struct MessageList<'a> {
    state: &'a AppState,
    theme: &'a Theme,
}

impl<'a> MessageList<'a> {
    pub fn new(state: &'a AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    pub fn show(self, ui: &mut egui::Ui) {
        let messages = self.state.messages.get_all();

        egui::ScrollArea::vertical()
            .id_salt("messages")
            .auto_shrink([false, false])
            .stick_to_bottom(true)
            .show(ui, |ui| {
                ui.vertical(|ui| {
                    ui.add_space(self.theme.spacing);

                    for message in &messages {
                        ui.push_id(message.id, |ui| self.show_message(ui, message));
                        ui.add_space(self.theme.spacing_sm);
                    }

                    ui.add_space(self.theme.spacing);
                });
            });
    }

    fn show_message(&self, ui: &mut egui::Ui, message: &Message) {
        let is_user = message.is_user();
        let bubble_color = if is_user {
            self.theme.user_bubble
        } else {
            self.theme.assistant_bubble
        };

        let align = if is_user { Align::RIGHT } else { Align::LEFT };

        ui.with_layout(egui::Layout::top_down(align), |ui| {
            let max_width = ui.available_width() * 0.8;

            egui::Frame::none()
                .fill(bubble_color)
                .rounding(self.theme.bubble_rounding)
                .inner_margin(egui::Margin::same(12.0))
                .show(ui, |ui| {
                    ui.set_max_width(max_width);

                    let text = RichText::new(&message.content).color(self.theme.text_primary);
                    let text = if message.is_voice_placeholder() {
                        text.italics()
                    } else {
                        text
                    };

                    let label = message_label(message);
                    ui.label(text).widget_info(|| {
                        egui::WidgetInfo::labeled(egui::WidgetType::Label, true, &label)
                    });
                });

            let time = message
                .timestamp
                .with_timezone(&chrono::Local)
                .format("%H:%M")
                .to_string();
            ui.label(RichText::new(time).size(10.0).color(self.theme.text_muted));
        });
    }
}
