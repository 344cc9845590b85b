//! Main application model with state management
//!
//! `AppModel` is created once by `main` and handed to the view by shared
//! reference and to the controller by exclusive reference. Nothing else
//! holds playback state.

use std::sync::Arc;

use super::catalog::Catalog;
use super::playback::PlaybackController;
use super::types::{ActiveSection, Playlist, Track, UiState};

/// Main application model containing all state
pub struct AppModel {
    catalog: Catalog,
    pub playback: PlaybackController,
    pub ui_state: UiState,
    /// Id of the playlist the current queue was started from
    playing_from: Option<String>,
    should_quit: bool,
}

impl AppModel {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            playback: PlaybackController::new(),
            ui_state: UiState::default(),
            playing_from: None,
            should_quit: false,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn set_should_quit(&mut self, quit: bool) {
        self.should_quit = quit;
    }

    // ========================================================================
    // Selection
    // ========================================================================

    pub fn selected_playlist(&self) -> Option<&Playlist> {
        self.catalog.playlists().get(self.ui_state.playlist_selected)
    }

    pub fn selected_track(&self) -> Option<&Arc<Track>> {
        self.selected_playlist()?
            .tracks
            .get(self.ui_state.track_selected)
    }

    pub fn cycle_section(&mut self) {
        self.ui_state.active_section = self.ui_state.active_section.toggle();
    }

    #[cfg(test)]
    pub fn set_active_section(&mut self, section: ActiveSection) {
        self.ui_state.active_section = section;
    }

    pub fn move_selection_up(&mut self) {
        match self.ui_state.active_section {
            ActiveSection::Playlists => {
                if self.ui_state.playlist_selected > 0 {
                    self.ui_state.playlist_selected -= 1;
                    self.ui_state.track_selected = 0;
                }
            }
            ActiveSection::Tracks => {
                self.ui_state.track_selected = self.ui_state.track_selected.saturating_sub(1);
            }
        }
    }

    pub fn move_selection_down(&mut self) {
        match self.ui_state.active_section {
            ActiveSection::Playlists => {
                let count = self.catalog.playlists().len();
                if self.ui_state.playlist_selected + 1 < count {
                    self.ui_state.playlist_selected += 1;
                    self.ui_state.track_selected = 0;
                }
            }
            ActiveSection::Tracks => {
                let count = self.selected_playlist().map_or(0, |p| p.tracks.len());
                if self.ui_state.track_selected + 1 < count {
                    self.ui_state.track_selected += 1;
                }
            }
        }
    }

    /// Queue up the selected playlist and start playing.
    ///
    /// From the sidebar the playlist starts at its first track, from the
    /// track list at the highlighted row. Returns `false` if nothing is selected.
    pub fn play_selection(&mut self) -> bool {
        let start = match self.ui_state.active_section {
            ActiveSection::Playlists => 0,
            ActiveSection::Tracks => {
                if self.selected_track().is_none() {
                    return false;
                }
                self.ui_state.track_selected
            }
        };
        let Some(playlist) = self.selected_playlist() else {
            return false;
        };
        if playlist.tracks.is_empty() {
            return false;
        }
        let (id, tracks) = (playlist.id.clone(), playlist.tracks.clone());
        self.playback.play_from(tracks, start);
        self.playing_from = Some(id);
        true
    }

    /// Playlist the current queue was started from
    pub fn playing_playlist(&self) -> Option<&Playlist> {
        self.catalog.playlist(self.playing_from.as_deref()?)
    }

    /// Is the given playlist the source of the current track
    pub fn is_current_playlist(&self, playlist: &Playlist) -> bool {
        self.playback.current_track().is_some()
            && self.playing_from.as_deref() == Some(playlist.id.as_str())
    }

    // ========================================================================
    // Overlays & view toggles
    // ========================================================================

    pub fn toggle_queue_view(&mut self) {
        self.ui_state.show_queue = !self.ui_state.show_queue;
    }

    pub fn show_help_popup(&mut self) {
        self.ui_state.show_help_popup = true;
    }

    pub fn hide_help_popup(&mut self) {
        self.ui_state.show_help_popup = false;
    }

    pub fn is_help_popup_open(&self) -> bool {
        self.ui_state.show_help_popup
    }

    pub fn toggle_mute(&mut self) {
        self.ui_state.muted = !self.ui_state.muted;
    }

    /// Volume the media engine should actually use
    pub fn effective_volume(&self) -> f64 {
        if self.ui_state.muted {
            0.0
        } else {
            self.playback.volume()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> AppModel {
        AppModel::new(Catalog::builtin().unwrap())
    }

    #[test]
    fn playlist_selection_is_bounded() {
        let mut model = model();
        model.move_selection_up();
        assert_eq!(model.ui_state.playlist_selected, 0);

        for _ in 0..10 {
            model.move_selection_down();
        }
        assert_eq!(model.ui_state.playlist_selected, 4);
        assert_eq!(model.selected_playlist().unwrap().name, "Pop Rising");
    }

    #[test]
    fn track_selection_resets_when_playlist_changes() {
        let mut model = model();
        model.set_active_section(ActiveSection::Tracks);
        model.move_selection_down();
        model.move_selection_down();
        assert_eq!(model.selected_track().unwrap().title, "good 4 u");

        model.cycle_section();
        model.move_selection_down();
        assert_eq!(model.ui_state.track_selected, 0);
        assert_eq!(model.selected_playlist().unwrap().name, "RapCaviar");
    }

    #[test]
    fn play_selection_from_sidebar_starts_at_first_track() {
        let mut model = model();
        model.move_selection_down();
        assert!(model.play_selection());
        assert!(model.playback.is_playing());
        assert_eq!(model.playback.queue().len(), 3);
        assert_eq!(model.playback.current_track().unwrap().title, "Blinding Lights");
        assert!(model.is_current_playlist(model.selected_playlist().unwrap()));
    }

    #[test]
    fn play_selection_from_track_list_uses_highlighted_row() {
        let mut model = model();
        model.set_active_section(ActiveSection::Tracks);
        model.move_selection_down();
        model.move_selection_down();
        model.move_selection_down();
        assert!(model.play_selection());
        assert_eq!(model.playback.current_index(), 3);
        assert_eq!(model.playback.current_track().unwrap().title, "Stay");
    }

    #[test]
    fn only_the_source_playlist_is_marked_as_playing() {
        let mut model = model();
        model.move_selection_down();
        assert!(model.play_selection());
        assert_eq!(model.playback.current_track().unwrap().title, "Blinding Lights");
        assert_eq!(model.playing_playlist().unwrap().name, "RapCaviar");

        let playlists = model.catalog().playlists();
        let marked: Vec<&str> = playlists
            .iter()
            .filter(|p| model.is_current_playlist(p))
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(marked, vec!["RapCaviar"]);
    }

    #[test]
    fn nothing_is_marked_before_playback() {
        let model = model();
        assert!(model.playing_playlist().is_none());
        assert!(!model.is_current_playlist(&model.catalog().playlists()[0]));
    }

    #[test]
    fn mute_zeroes_effective_volume_only() {
        let mut model = model();
        model.playback.set_volume(0.4);
        model.toggle_mute();
        assert_eq!(model.effective_volume(), 0.0);
        assert_eq!(model.playback.volume(), 0.4);
        model.toggle_mute();
        assert_eq!(model.effective_volume(), 0.4);
    }
}
