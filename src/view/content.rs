//! Main content area rendering (playlist detail, queue)

use std::sync::Arc;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, ListItem, Paragraph},
    Frame,
};
use ratatui::widgets::Padding;

use crate::model::{ActiveSection, AppModel, Track};
use super::utils::{calculate_num_width, format_duration, render_scrollable_list, truncate_string};

pub fn render_main_content(frame: &mut Frame, area: Rect, model: &AppModel) {
    if model.ui_state.show_queue {
        render_queue(frame, area, model);
    } else {
        render_playlist_detail(frame, area, model);
    }
}

fn render_playlist_detail(frame: &mut Frame, area: Rect, model: &AppModel) {
    let is_focused = model.ui_state.active_section == ActiveSection::Tracks;
    let border_style = if is_focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };

    let Some(playlist) = model.selected_playlist() else {
        let empty = Paragraph::new("No playlists available")
            .style(Style::default().fg(Color::DarkGray))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .padding(Padding::horizontal(1))
                    .border_style(border_style),
            );
        frame.render_widget(empty, area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header
            Constraint::Min(0),    // Tracks
        ])
        .split(area);

    let header_text = format!(
        "{}\n{} • {} • {} songs, {} min",
        playlist.name,
        playlist.description,
        playlist.created_by,
        playlist.tracks.len(),
        playlist.total_minutes(),
    );
    let header = Paragraph::new(header_text)
        .style(Style::default().fg(Color::Cyan))
        .block(
            Block::default()
                .padding(Padding::horizontal(1))
                .borders(Borders::ALL)
                .border_style(border_style),
        );
    frame.render_widget(header, chunks[0]);

    let selected_index = model.ui_state.track_selected;
    let content_width = chunks[1].width.saturating_sub(4) as usize;
    let current_id = model.playback.current_track().map(|t| t.id.as_str());
    let track_items = render_track_items(
        &playlist.tracks,
        Some(selected_index),
        is_focused,
        current_id,
        content_width,
    );

    let tracks_block = Block::default()
        .borders(Borders::ALL)
        .title(" Tracks ")
        .padding(Padding::horizontal(1))
        .border_style(border_style);

    // +1 for the header row
    render_scrollable_list(frame, chunks[1], track_items, selected_index + 1, tracks_block);
}

fn render_queue(frame: &mut Frame, area: Rect, model: &AppModel) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Currently playing
            Constraint::Min(0),    // Queue
        ])
        .split(area);

    let cp_text = match model.playback.current_track() {
        Some(track) => format!("{}  -  {} ({})", track.title, track.artist, track.album),
        None => "No track playing".to_string(),
    };
    let title = match model.playing_playlist() {
        Some(playlist) => format!(" Now Playing from {} ", playlist.name),
        None => " Now Playing ".to_string(),
    };
    let cp_widget = Paragraph::new(cp_text)
        .style(Style::default().fg(Color::Cyan))
        .block(
            Block::default()
                .padding(Padding::horizontal(1))
                .borders(Borders::ALL)
                .title(title),
        );
    frame.render_widget(cp_widget, chunks[0]);

    let queue = model.playback.queue();
    let upcoming = queue.upcoming();
    let content_width = chunks[1].width.saturating_sub(4) as usize;
    let mut list_items = render_track_items(upcoming, None, false, None, content_width);

    if upcoming.is_empty() {
        let text = if queue.is_empty() { "Queue is empty" } else { "End of queue" };
        list_items.push(
            ListItem::new(format!("       {}", text))
                .style(Style::default().fg(Color::DarkGray)),
        );
    }

    let queue_block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Up Next ({}) ", upcoming.len()))
        .padding(Padding::horizontal(1));

    render_scrollable_list(frame, chunks[1], list_items, 0, queue_block);
}

fn render_track_items(
    tracks: &[Arc<Track>],
    selected_index: Option<usize>,
    is_focused: bool,
    current_track_id: Option<&str>,
    content_width: usize,
) -> Vec<ListItem<'static>> {
    let num_width = calculate_num_width(tracks.len());
    let duration_width = 8;
    let fixed_width = 1 + num_width + 3 + 3 + 3 + 3 + duration_width;
    let remaining_width = content_width.saturating_sub(fixed_width);
    let title_width = (remaining_width * 40) / 100;
    let artist_width = (remaining_width * 30) / 100;
    let album_width = remaining_width.saturating_sub(title_width + artist_width);

    let mut items: Vec<ListItem<'static>> = vec![
        ListItem::new(format!(
            " {:<num_width$}   {:<title_width$}   {:<artist_width$}   {:<album_width$}   {}",
            "#", "Title", "Artist", "Album", "Duration",
            num_width = num_width,
            title_width = title_width,
            artist_width = artist_width,
            album_width = album_width
        ))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
    ];

    let track_items = tracks.iter().enumerate().map(|(i, track)| {
        let is_selected = selected_index == Some(i);
        let is_playing = current_track_id == Some(track.id.as_str());
        let style = if is_selected && is_focused {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else if is_playing {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else if is_selected {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        let playing_indicator = if is_playing { "▶" } else { " " };
        let track_num = format!("{}{:<num_width$}", playing_indicator, i + 1, num_width = num_width);
        let title_str = truncate_string(&track.title, title_width);
        let artist_str = truncate_string(&track.artist, artist_width);
        let album_str = truncate_string(&track.album, album_width);
        let duration = format_duration(f64::from(track.duration));

        ListItem::new(format!("{}   {}   {}   {}   {}", track_num, title_str, artist_str, album_str, duration)).style(style)
    });

    items.extend(track_items);
    items
}
