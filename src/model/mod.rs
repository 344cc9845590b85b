//! Model module - Application state and data types
//!
//! This module contains all the data structures and state management for the application.
//! It is organized into submodules by responsibility:
//!
//! - `types`: Core type definitions (tracks, playlists, repeat mode, UI state)
//! - `random`: Injectable random source for shuffle
//! - `playback`: Queue, playback state and the controller that mutates them
//! - `catalog`: Mock track and playlist catalog
//! - `app_model`: Main application model owned by the application root

mod types;
mod random;
mod playback;
mod catalog;
mod app_model;

// Re-export the types used outside the model
pub use types::{ActiveSection, Track};
#[cfg(test)]
pub use types::RepeatMode;

pub use playback::DEFAULT_VOLUME;

pub use catalog::Catalog;

pub use app_model::AppModel;
