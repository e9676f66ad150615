//! UI components and application module
//!
//! This module provides the egui/eframe-based chat screen.

mod app;
pub mod components;
mod state;
mod theme;

pub use app::LiveChatApp;
pub use components::{AlertDialog, InputBar, MessageList};
pub use state::AppState;
pub use theme::Theme;
