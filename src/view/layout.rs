//! Layout rendering (top bar, sidebar)

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, ListItem, Paragraph},
    Frame,
};
use ratatui::widgets::Padding;

use crate::model::{ActiveSection, AppModel};
use super::utils::{local_greeting, render_scrollable_list};

pub fn render_top_bar(frame: &mut Frame, area: Rect, model: &AppModel) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),     // Greeting
            Constraint::Length(24), // Help hint
        ])
        .split(area);

    let greeting = Paragraph::new(local_greeting())
        .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" ♪ Spotify ")
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(greeting, chunks[0]);

    let hint = if model.ui_state.show_queue { "U: back  H: help" } else { "U: queue  H: help" };
    let hint = Paragraph::new(hint)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL).padding(Padding::horizontal(1)));
    frame.render_widget(hint, chunks[1]);
}

pub fn render_sidebar(frame: &mut Frame, area: Rect, model: &AppModel) {
    let ui_state = &model.ui_state;
    let is_focused = ui_state.active_section == ActiveSection::Playlists;

    let playlist_items: Vec<ListItem> = model
        .catalog()
        .playlists()
        .iter()
        .enumerate()
        .map(|(i, playlist)| {
            let style = if i == ui_state.playlist_selected && is_focused {
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else if i == ui_state.playlist_selected {
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            let marker = if model.is_current_playlist(playlist) { "♫ " } else { "  " };
            ListItem::new(format!("{}{}", marker, playlist.name)).style(style)
        })
        .collect();

    let border_style = if is_focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Playlists ")
        .padding(Padding::horizontal(1))
        .border_style(border_style);

    render_scrollable_list(frame, area, playlist_items, ui_state.playlist_selected, block);
}
