//! Main application struct and eframe integration
//!
//! This module contains the LiveChatApp that implements eframe::App.

use crate::integration::ExchangeWorker;
use crate::ui::components::{AlertDialog, InputBar, MessageList};
use crate::ui::state::AppState;
use crate::ui::theme::Theme;
use egui::{self, CentralPanel, TopBottomPanel};
use std::thread;
use tracing::{info, warn};

/// Chat screen application
pub struct LiveChatApp {
    /// Application state
    state: AppState,
    /// Visual theme
    theme: Theme,
    /// Background voice exchanges, kept alive with the window
    _worker: Option<ExchangeWorker>,
}

impl LiveChatApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        state: AppState,
        worker: Option<ExchangeWorker>,
    ) -> Self {
        let theme = Theme::dark();
        theme.apply(&cc.egui_ctx);

        // Background appends (voice replies) wake the UI
        let updates = state.messages.subscribe();
        let ctx = cc.egui_ctx.clone();
        let spawned = thread::Builder::new()
            .name("conversation-repaint".to_string())
            .spawn(move || {
                while updates.recv().is_ok() {
                    ctx.request_repaint();
                }
            });
        if let Err(e) = spawned {
            warn!("Failed to start repaint listener: {}", e);
        }

        info!("Chat screen initialized");

        Self {
            state,
            theme,
            _worker: worker,
        }
    }

    /// Show the bottom input area
    fn show_input_area(&mut self, ctx: &egui::Context) {
        TopBottomPanel::bottom("input_area")
            .frame(
                egui::Frame::none()
                    .fill(self.theme.bg_primary)
                    .inner_margin(egui::Margin::same(10.0)),
            )
            .show(ctx, |ui| {
                InputBar::new(&mut self.state, &self.theme).show(ui);
            });
    }

    /// Show the main content area (message list)
    fn show_content(&mut self, ctx: &egui::Context) {
        CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(self.theme.bg_primary)
                    .inner_margin(egui::Margin::symmetric(self.theme.spacing, 0.0)),
            )
            .show(ctx, |ui| {
                MessageList::new(&self.state, &self.theme).show(ui);
            });
    }
}

impl eframe::App for LiveChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.poll_events();

        self.show_input_area(ctx);
        self.show_content(ctx);
        AlertDialog::new(&mut self.state, &self.theme).show(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Chat screen shutting down");
    }
}
