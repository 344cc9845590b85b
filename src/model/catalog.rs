//! Mock catalog of tracks and playlists
//!
//! The catalog ships embedded in the binary; a JSON file with the same shape
//! can replace it at startup.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Deserialize;
use thiserror::Error;

use super::types::{Playlist, Track};

const BUILTIN_CATALOG: &str = include_str!("../../assets/catalog.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate track id {0:?}")]
    DuplicateTrack(String),
    #[error("duplicate playlist id {0:?}")]
    DuplicatePlaylist(String),
    #[error("playlist {playlist:?} references unknown track {track:?}")]
    UnknownTrack { playlist: String, track: String },
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCatalog {
    tracks: Vec<Track>,
    #[serde(default)]
    playlists: Vec<RawPlaylist>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPlaylist {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    cover_image: String,
    track_ids: Vec<String>,
    created_by: String,
}

/// Immutable set of tracks and the playlists built from them
#[derive(Clone, Debug)]
pub struct Catalog {
    tracks: Vec<Arc<Track>>,
    playlists: Vec<Playlist>,
}

impl Catalog {
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self, CatalogError> {
        let raw: RawCatalog = serde_json::from_str(content)?;

        let mut by_id: HashMap<String, Arc<Track>> = HashMap::with_capacity(raw.tracks.len());
        let mut tracks = Vec::with_capacity(raw.tracks.len());
        for track in raw.tracks {
            let track = Arc::new(track);
            if by_id.insert(track.id.clone(), track.clone()).is_some() {
                return Err(CatalogError::DuplicateTrack(track.id.clone()));
            }
            tracks.push(track);
        }

        let mut playlists: Vec<Playlist> = Vec::with_capacity(raw.playlists.len());
        for raw_playlist in raw.playlists {
            if playlists.iter().any(|p| p.id == raw_playlist.id) {
                return Err(CatalogError::DuplicatePlaylist(raw_playlist.id));
            }

            let playlist_tracks = raw_playlist
                .track_ids
                .iter()
                .map(|id| {
                    by_id.get(id).cloned().ok_or_else(|| CatalogError::UnknownTrack {
                        playlist: raw_playlist.id.clone(),
                        track: id.clone(),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;

            playlists.push(Playlist {
                id: raw_playlist.id,
                name: raw_playlist.name,
                description: raw_playlist.description,
                cover_image: raw_playlist.cover_image,
                tracks: playlist_tracks,
                created_by: raw_playlist.created_by,
            });
        }

        tracing::debug!(tracks = tracks.len(), playlists = playlists.len(), "Catalog loaded");
        Ok(Self { tracks, playlists })
    }

    pub fn tracks(&self) -> &[Arc<Track>] {
        &self.tracks
    }

    pub fn playlists(&self) -> &[Playlist] {
        &self.playlists
    }

    pub fn playlist(&self, id: &str) -> Option<&Playlist> {
        self.playlists.iter().find(|p| p.id == id)
    }

    #[cfg(test)]
    pub fn track(&self, id: &str) -> Option<&Arc<Track>> {
        self.tracks.iter().find(|t| t.id == id)
    }
}
