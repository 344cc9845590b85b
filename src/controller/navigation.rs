//! Navigation-related controller methods (playlists, track list, queue view)

use crate::model::AppModel;
use super::AppController;

impl AppController {
    /// Play the highlighted playlist or track.
    pub fn play_selection(&mut self, model: &mut AppModel) {
        if !model.play_selection() {
            tracing::debug!("Nothing selected to play");
            return;
        }

        if let Some(playlist) = model.playing_playlist() {
            tracing::info!(
                playlist = %playlist.name,
                cover = %playlist.cover_image,
                start_index = model.playback.current_index(),
                "Playing from playlist"
            );
        }
        self.load_current_track(model);
    }

    pub fn toggle_queue_view(&mut self, model: &mut AppModel) {
        model.toggle_queue_view();
        tracing::debug!(visible = model.ui_state.show_queue, "Queue view toggled");
    }
}

#[cfg(test)]
mod tests {
    use crate::audio::EngineCommand;
    use crate::controller::test_support::Harness;
    use crate::model::ActiveSection;

    #[test]
    fn play_selection_loads_and_starts_engine() {
        let mut h = Harness::new();
        h.controller.play_selection(&mut h.model);
        assert_eq!(
            h.sent(),
            vec![
                EngineCommand::Load { load_id: 1, track_id: "1".to_string(), duration: 200.0 },
                EngineCommand::Play,
                EngineCommand::SetVolume(0.7),
            ]
        );
    }

    #[test]
    fn replaying_while_playing_reloads() {
        let mut h = Harness::new();
        h.controller.play_selection(&mut h.model);
        h.sent();

        h.model.set_active_section(ActiveSection::Tracks);
        h.model.move_selection_down();
        h.controller.play_selection(&mut h.model);
        assert_eq!(
            h.sent(),
            vec![
                EngineCommand::Load { load_id: 2, track_id: "2".to_string(), duration: 174.0 },
                EngineCommand::Play,
            ]
        );
    }

    #[test]
    fn queue_view_toggles() {
        let mut h = Harness::new();
        h.controller.toggle_queue_view(&mut h.model);
        assert!(h.model.ui_state.show_queue);
        h.controller.toggle_queue_view(&mut h.model);
        assert!(!h.model.ui_state.show_queue);
    }
}
