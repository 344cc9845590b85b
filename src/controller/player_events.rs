//! Media engine event handling

use crate::audio::PlayerEvent;
use crate::model::AppModel;
use super::AppController;

impl AppController {
    /// Drain every pending engine event into the model.
    pub fn process_player_events(&mut self, model: &mut AppModel) {
        while let Some(event) = self.engine.try_next_event() {
            self.handle_player_event(model, event);
        }
    }

    pub fn handle_player_event(&mut self, model: &mut AppModel, event: PlayerEvent) {
        if event.load_id() != self.load_id {
            tracing::trace!(?event, current = self.load_id, "Dropping event from a previous load");
            return;
        }

        match event {
            PlayerEvent::PositionChanged { position, .. } => {
                tracing::trace!(position, "PlayerEvent::PositionChanged");
                model.playback.set_current_time(position);
            }
            PlayerEvent::EndOfTrack { .. } => {
                tracing::debug!(position = model.playback.current_time(), "PlayerEvent::EndOfTrack");
                if model.playback.advance() {
                    self.load_current_track(model);
                } else {
                    tracing::info!("Reached end of queue, stopping playback");
                    model.playback.set_is_playing(false);
                    // The engine already stopped on its own
                    self.synced.is_playing = false;
                }
            }
        }
    }
}
