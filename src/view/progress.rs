//! Player bar rendering

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Gauge},
    Frame,
};

use crate::model::AppModel;
use super::utils::format_duration;

pub fn render_progress_bar(frame: &mut Frame, area: Rect, model: &AppModel) {
    let state = model.playback.state();

    let (status_text, duration) = match &state.current_track {
        None => (" No track playing".to_string(), 0.0),
        Some(track) => {
            let glyph = if state.is_playing { " ▶" } else { "⏸ " };
            (
                format!("{} {} | {} ({})", glyph, track.title, track.artist, track.album),
                f64::from(track.duration),
            )
        }
    };

    let shuffle_text = if state.shuffle { "Shuffle: On" } else { "Shuffle: Off" };
    let repeat_text = format!("Repeat: {}", state.repeat.label());
    let volume_text = if model.ui_state.muted {
        "Muted".to_string()
    } else {
        format!("Vol: {}%", (state.volume * 100.0).round() as u32)
    };

    let time_str = format!(
        "{} / {}",
        format_duration(state.current_time),
        format_duration(duration)
    );

    let progress_ratio = if duration > 0.0 {
        (state.current_time / duration).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let title = format!("{} ", status_text);
    let controls_info = format!(" {} | {} | {} ", shuffle_text, repeat_text, volume_text);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .title_bottom(Line::from(controls_info).right_aligned()),
        )
        .gauge_style(Style::default().fg(Color::Green))
        .ratio(progress_ratio)
        .label(time_str);

    frame.render_widget(gauge, area);
}
