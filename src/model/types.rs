//! Core type definitions for the application

use std::sync::Arc;

use serde::Deserialize;

/// A single track from the catalog. Shared by reference between playlists and the queue.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub album: String,
    /// Length in whole seconds
    pub duration: u32,
    pub album_art: String,
    pub audio_url: String,
}

/// A named, ordered collection of tracks
#[derive(Clone, Debug)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    pub description: String,
    pub cover_image: String,
    pub tracks: Vec<Arc<Track>>,
    pub created_by: String,
}

impl Playlist {
    pub fn total_duration_secs(&self) -> u64 {
        self.tracks.iter().map(|t| u64::from(t.duration)).sum()
    }

    /// Total running time rounded down to whole minutes
    pub fn total_minutes(&self) -> u64 {
        self.total_duration_secs() / 60
    }

    pub fn contains(&self, track_id: &str) -> bool {
        self.tracks.iter().any(|t| t.id == track_id)
    }
}

/// Repeat mode state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RepeatMode {
    #[default]
    Off,
    Playlist,
    Track,
}

impl RepeatMode {
    /// off → playlist → track → off
    pub fn next(self) -> Self {
        match self {
            RepeatMode::Off => RepeatMode::Playlist,
            RepeatMode::Playlist => RepeatMode::Track,
            RepeatMode::Track => RepeatMode::Off,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RepeatMode::Off => "Off",
            RepeatMode::Playlist => "Playlist",
            RepeatMode::Track => "Track",
        }
    }
}

/// Which section of the UI is currently active/focused
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ActiveSection {
    #[default]
    Playlists,
    Tracks,
}

impl ActiveSection {
    pub fn toggle(self) -> Self {
        match self {
            ActiveSection::Playlists => ActiveSection::Tracks,
            ActiveSection::Tracks => ActiveSection::Playlists,
        }
    }
}

/// UI state for the application
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub active_section: ActiveSection,
    pub playlist_selected: usize,
    pub track_selected: usize,
    pub show_queue: bool,
    pub show_help_popup: bool,
    /// Mute is a view concern; the stored volume is left untouched
    pub muted: bool,
}
