//! Playback control methods

use crate::audio::EngineCommand;
use crate::model::AppModel;

use super::AppController;

pub const VOLUME_STEP: f64 = 0.05;
pub const SEEK_STEP_SECS: f64 = 5.0;

impl AppController {
    pub fn toggle_playback(&mut self, model: &mut AppModel) {
        if model.playback.current_track().is_none() {
            tracing::debug!("Nothing queued, ignoring play/pause");
            return;
        }
        model.playback.toggle_playing();
        tracing::info!(
            action = if model.playback.is_playing() { "resumed" } else { "paused" },
            "Playback toggled"
        );
        self.sync_engine(model);
    }

    pub fn next_track(&mut self, model: &mut AppModel) {
        if model.playback.advance() {
            tracing::info!(index = model.playback.current_index(), "Skipped to next track");
            self.load_current_track(model);
        }
    }

    pub fn previous_track(&mut self, model: &mut AppModel) {
        if model.playback.rewind() {
            tracing::info!(index = model.playback.current_index(), "Went back to previous track");
            self.load_current_track(model);
        }
    }

    pub fn toggle_shuffle(&mut self, model: &mut AppModel) {
        model.playback.toggle_shuffle();
        tracing::info!(shuffle = model.playback.shuffle(), "Shuffle toggled");
    }

    pub fn cycle_repeat(&mut self, model: &mut AppModel) {
        model.playback.toggle_repeat();
        tracing::info!(repeat = model.playback.repeat().label(), "Repeat mode changed");
    }

    pub fn volume_up(&mut self, model: &mut AppModel) {
        let volume = model.playback.volume() + VOLUME_STEP;
        self.set_volume(model, volume);
    }

    pub fn volume_down(&mut self, model: &mut AppModel) {
        let volume = model.playback.volume() - VOLUME_STEP;
        self.set_volume(model, volume);
    }

    fn set_volume(&mut self, model: &mut AppModel, volume: f64) {
        // Snap to the step grid so repeated presses don't drift
        let volume = (volume / VOLUME_STEP).round() * VOLUME_STEP;
        model.playback.set_volume(volume);
        // Changing the volume by hand unmutes, like the slider in the web player
        model.ui_state.muted = model.playback.volume() == 0.0;
        tracing::debug!(volume = model.playback.volume(), "Volume changed");
        self.sync_engine(model);
    }

    pub fn toggle_mute(&mut self, model: &mut AppModel) {
        model.toggle_mute();
        tracing::debug!(muted = model.ui_state.muted, "Mute toggled");
        self.sync_engine(model);
    }

    pub fn seek(&mut self, model: &mut AppModel, delta_secs: f64) {
        if let Some(position) = model.playback.seek_by(delta_secs) {
            tracing::debug!(position, "Seeked");
            self.engine.send(EngineCommand::Seek(position));
        }
    }
}
