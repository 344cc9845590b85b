//! View module - UI rendering
//!
//! This module handles all UI rendering for the application using ratatui.
//! It is organized into submodules by component type:
//!
//! - `utils`: Shared utility functions (formatting, scrollable lists, greeting)
//! - `layout`: Main layout structure (top bar, sidebar)
//! - `content`: Playlist detail and queue rendering
//! - `progress`: Player bar rendering
//! - `overlays`: Help popup

mod utils;
mod layout;
mod content;
mod progress;
mod overlays;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::model::AppModel;

pub struct AppView;

impl AppView {
    pub fn render(frame: &mut Frame, model: &AppModel) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Greeting
                Constraint::Min(0),    // Main content (sidebar + content)
                Constraint::Length(3), // Player bar
            ])
            .split(frame.area());

        layout::render_top_bar(frame, chunks[0], model);

        let main_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(30), // Playlists
                Constraint::Percentage(70), // Main content
            ])
            .split(chunks[1]);

        layout::render_sidebar(frame, main_chunks[0], model);
        content::render_main_content(frame, main_chunks[1], model);
        progress::render_progress_bar(frame, chunks[2], model);

        if model.ui_state.show_help_popup {
            overlays::render_help_popup(frame);
        }
    }
}
