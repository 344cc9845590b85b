//! Key event handling

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::model::AppModel;
use super::playback::SEEK_STEP_SECS;
use super::AppController;

impl AppController {
    pub fn handle_key_event(&mut self, model: &mut AppModel, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        // Help popup swallows everything except its own close keys
        if model.is_help_popup_open() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('h') | KeyCode::Char('H')) {
                model.hide_help_popup();
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                model.set_should_quit(true);
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                model.set_should_quit(true);
            }
            KeyCode::Tab | KeyCode::BackTab => {
                model.cycle_section();
            }
            KeyCode::Up => {
                model.move_selection_up();
            }
            KeyCode::Down => {
                model.move_selection_down();
            }
            KeyCode::Enter => {
                self.play_selection(model);
            }
            // Play/Pause toggle
            KeyCode::Char(' ') => {
                self.toggle_playback(model);
            }
            // Next track
            KeyCode::Char('n') | KeyCode::Char('N') => {
                self.next_track(model);
            }
            // Previous track
            KeyCode::Char('p') | KeyCode::Char('P') => {
                self.previous_track(model);
            }
            // Toggle shuffle
            KeyCode::Char('s') | KeyCode::Char('S') => {
                self.toggle_shuffle(model);
            }
            // Cycle repeat mode
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.cycle_repeat(model);
            }
            // Volume up
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.volume_up(model);
            }
            // Volume down
            KeyCode::Char('-') => {
                self.volume_down(model);
            }
            KeyCode::Char('m') | KeyCode::Char('M') => {
                self.toggle_mute(model);
            }
            // Seek
            KeyCode::Left => {
                self.seek(model, -SEEK_STEP_SECS);
            }
            KeyCode::Right => {
                self.seek(model, SEEK_STEP_SECS);
            }
            // Show queue
            KeyCode::Char('u') | KeyCode::Char('U') => {
                self.toggle_queue_view(model);
            }
            // Show help popup
            KeyCode::Char('h') | KeyCode::Char('H') => {
                model.show_help_popup();
            }
            _ => {}
        }
    }
}
