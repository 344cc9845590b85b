//! Overlay rendering (help popup)

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const KEYBINDINGS: &[(&str, &str)] = &[
    ("", "── Navigation ──"),
    ("Tab / Shift+Tab", "Switch playlists / tracks"),
    ("↑ / ↓", "Move selection"),
    ("Enter", "Play selection"),
    ("U", "Toggle queue view"),
    ("", ""),
    ("", "── Playback ──"),
    ("Space", "Play / Pause"),
    ("N", "Next track"),
    ("P", "Previous track"),
    ("← / →", "Seek -5s / +5s"),
    ("S", "Toggle shuffle"),
    ("R", "Cycle repeat (off → playlist → track)"),
    ("+ / -", "Volume up / down"),
    ("M", "Mute / Unmute"),
    ("", ""),
    ("", "── General ──"),
    ("H", "Toggle this help"),
    ("Q", "Quit"),
];

pub fn render_help_popup(frame: &mut Frame) {
    let area = frame.area();

    let popup_width = 62.min(area.width);
    let popup_height = (KEYBINDINGS.len() as u16 + 2).min(area.height.saturating_sub(4));

    let popup_x = area.width.saturating_sub(popup_width) / 2;
    let popup_y = area.height.saturating_sub(popup_height) / 2;

    let popup_area = Rect {
        x: popup_x,
        y: popup_y,
        width: popup_width,
        height: popup_height,
    };

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let lines: Vec<Line> = KEYBINDINGS
        .iter()
        .map(|(key, desc)| {
            if key.is_empty() {
                // Section header or empty line
                Line::from(Span::styled(
                    format!("{:^38}", desc),
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(vec![
                    Span::styled(
                        format!("{:>18}", key),
                        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::styled(desc.to_string(), Style::default().fg(Color::White)),
                ])
            }
        })
        .collect();

    let help_text = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Help (H or Esc to close) ")
                .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                .style(Style::default().bg(Color::Black)),
        )
        .style(Style::default().bg(Color::Black));

    frame.render_widget(help_text, popup_area);
}
