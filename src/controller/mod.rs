//! Controller module - Application logic and event handling
//!
//! This module contains the application controller that handles user input,
//! routes media engine events into the model, and keeps the engine in step
//! with the playback state. It is organized into submodules by responsibility:
//!
//! - `input`: Key event handling
//! - `playback`: Playback control methods
//! - `navigation`: Playlist/track selection and view toggles
//! - `player_events`: Media engine event handling

mod input;
mod playback;
mod navigation;
mod player_events;

use crate::audio::{EngineCommand, EngineHandle};
use crate::model::AppModel;

/// What the engine was last told, so only real changes are forwarded
#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct EngineSync {
    is_playing: bool,
    volume: Option<f64>,
}

pub struct AppController {
    engine: EngineHandle,
    synced: EngineSync,
    /// Id of the latest `Load`/`Unload`; events from older loads are stale
    load_id: u64,
}

impl AppController {
    pub fn new(engine: EngineHandle) -> Self {
        Self {
            engine,
            synced: EngineSync::default(),
            load_id: 0,
        }
    }

    pub fn into_engine(self) -> EngineHandle {
        self.engine
    }

    /// Point the engine at the current track, starting from zero.
    pub(crate) fn load_current_track(&mut self, model: &AppModel) {
        self.load_id += 1;
        match model.playback.current_track() {
            Some(track) => {
                tracing::info!(track = %track.title, artist = %track.artist, "Loading track");
                self.engine.send(EngineCommand::Load {
                    load_id: self.load_id,
                    track_id: track.id.clone(),
                    duration: f64::from(track.duration),
                });
                // Load leaves the engine paused after an end-of-track
                self.synced.is_playing = false;
            }
            None => {
                self.engine.send(EngineCommand::Unload);
                self.synced.is_playing = false;
            }
        }
        self.sync_engine(model);
    }

    /// Forward play state and volume changes to the engine.
    pub fn sync_engine(&mut self, model: &AppModel) {
        let is_playing = model.playback.is_playing() && model.playback.current_track().is_some();
        if is_playing != self.synced.is_playing {
            self.engine.send(if is_playing {
                EngineCommand::Play
            } else {
                EngineCommand::Pause
            });
            self.synced.is_playing = is_playing;
        }

        let volume = model.effective_volume();
        if self.synced.volume != Some(volume) {
            self.engine.send(EngineCommand::SetVolume(volume));
            self.synced.volume = Some(volume);
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};

    use super::AppController;
    use crate::audio::{EngineCommand, EngineHandle, PlayerEvent};
    use crate::model::{AppModel, Catalog};

    pub(crate) struct Harness {
        pub model: AppModel,
        pub controller: AppController,
        pub commands: UnboundedReceiver<EngineCommand>,
        pub events: UnboundedSender<PlayerEvent>,
    }

    impl Harness {
        pub fn new() -> Self {
            let (engine, commands, events) = EngineHandle::detached();
            Self {
                model: AppModel::new(Catalog::builtin().unwrap()),
                controller: AppController::new(engine),
                commands,
                events,
            }
        }

        /// Commands sent to the engine since the last call
        pub fn sent(&mut self) -> Vec<EngineCommand> {
            let mut sent = Vec::new();
            while let Ok(command) = self.commands.try_recv() {
                sent.push(command);
            }
            sent
        }
    }
}
