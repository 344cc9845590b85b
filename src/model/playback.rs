//! Playback state and the controller that owns every transition on it

use std::sync::Arc;

use super::random::{RandomSource, ThreadRandom};
use super::types::{RepeatMode, Track};

pub const DEFAULT_VOLUME: f64 = 0.7;

/// Snapshot of everything the player bar needs to render
#[derive(Clone, Debug, PartialEq)]
pub struct PlaybackState {
    pub current_track: Option<Arc<Track>>,
    pub is_playing: bool,
    /// Elapsed seconds into the current track
    pub current_time: f64,
    /// Linear volume in `[0.0, 1.0]`
    pub volume: f64,
    pub shuffle: bool,
    pub repeat: RepeatMode,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            current_track: None,
            is_playing: false,
            current_time: 0.0,
            volume: DEFAULT_VOLUME,
            shuffle: false,
            repeat: RepeatMode::Off,
        }
    }
}

/// Ordered playback sequence plus a pointer to the active entry
#[derive(Clone, Debug, Default)]
pub struct Queue {
    tracks: Vec<Arc<Track>>,
    current_index: usize,
}

impl Queue {
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Arc<Track>> {
        self.tracks.get(index)
    }

    /// Tracks after the current one, in queue order
    pub fn upcoming(&self) -> &[Arc<Track>] {
        self.tracks
            .get(self.current_index.saturating_add(1)..)
            .unwrap_or_default()
    }
}

/// Owns the queue and playback state. All mutation goes through here.
///
/// Every operation is total: empty queues and out-of-range indices turn
/// into no-ops instead of errors.
#[derive(Debug)]
pub struct PlaybackController<R = ThreadRandom> {
    state: PlaybackState,
    queue: Queue,
    rng: R,
}

impl PlaybackController<ThreadRandom> {
    pub fn new() -> Self {
        Self::with_random(ThreadRandom)
    }
}

impl Default for PlaybackController<ThreadRandom> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource> PlaybackController<R> {
    pub fn with_random(rng: R) -> Self {
        Self {
            state: PlaybackState::default(),
            queue: Queue::default(),
            rng,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn queue(&self) -> &Queue {
        &self.queue
    }

    pub fn current_index(&self) -> usize {
        self.queue.current_index()
    }

    pub fn current_track(&self) -> Option<&Arc<Track>> {
        self.state.current_track.as_ref()
    }

    pub fn is_playing(&self) -> bool {
        self.state.is_playing
    }

    pub fn current_time(&self) -> f64 {
        self.state.current_time
    }

    pub fn volume(&self) -> f64 {
        self.state.volume
    }

    pub fn shuffle(&self) -> bool {
        self.state.shuffle
    }

    pub fn repeat(&self) -> RepeatMode {
        self.state.repeat
    }

    // ========================================================================
    // Queue
    // ========================================================================

    /// Replace the queue and point at `start_index`.
    ///
    /// An out-of-range index leaves the current track empty.
    pub fn set_queue(&mut self, tracks: Vec<Arc<Track>>, start_index: usize) {
        self.state.current_track = tracks.get(start_index).cloned();
        self.queue = Queue {
            tracks,
            current_index: start_index,
        };
        tracing::debug!(
            len = self.queue.len(),
            start_index,
            track = self.state.current_track.as_ref().map(|t| t.title.as_str()),
            "Queue replaced"
        );
    }

    /// Start playing `tracks` from `index` with the position rewound.
    pub fn play_from(&mut self, tracks: Vec<Arc<Track>>, index: usize) {
        self.set_queue(tracks, index);
        self.state.current_time = 0.0;
        self.set_is_playing(true);
    }

    /// Move to the next track according to repeat and shuffle.
    ///
    /// Returns `false` when nothing changed (empty queue, or end of queue
    /// with repeat off). A `true` result always means the position was reset.
    pub fn advance(&mut self) -> bool {
        let len = self.queue.len();
        if len == 0 {
            return false;
        }

        let next_index = if self.state.repeat == RepeatMode::Track {
            self.queue.current_index
        } else if self.state.shuffle {
            self.rng.next_index(len)
        } else {
            let next = self.queue.current_index.saturating_add(1);
            if next < len {
                next
            } else if self.state.repeat == RepeatMode::Playlist {
                0
            } else {
                tracing::debug!(index = self.queue.current_index, "End of queue reached");
                return false;
            }
        };

        self.move_to(next_index);
        true
    }

    /// Move to the previous track, wrapping to the last one from the start.
    pub fn rewind(&mut self) -> bool {
        let len = self.queue.len();
        if len == 0 {
            return false;
        }

        let prev_index = self.queue.current_index.checked_sub(1).unwrap_or(len - 1);
        self.move_to(prev_index);
        true
    }

    fn move_to(&mut self, index: usize) {
        self.queue.current_index = index;
        self.state.current_track = self.queue.get(index).cloned();
        self.state.current_time = 0.0;
        tracing::debug!(
            index,
            track = self.state.current_track.as_ref().map(|t| t.title.as_str()),
            "Current track changed"
        );
    }

    // ========================================================================
    // Direct setters
    // ========================================================================

    pub fn set_is_playing(&mut self, playing: bool) {
        self.state.is_playing = playing;
    }

    pub fn toggle_playing(&mut self) {
        self.state.is_playing = !self.state.is_playing;
    }

    /// Negative positions are stored as zero; non-finite values are ignored.
    pub fn set_current_time(&mut self, seconds: f64) {
        if seconds.is_finite() {
            self.state.current_time = seconds.max(0.0);
        }
    }

    /// Volume is clamped to `[0.0, 1.0]`; NaN is ignored.
    pub fn set_volume(&mut self, volume: f64) {
        if !volume.is_nan() {
            self.state.volume = volume.clamp(0.0, 1.0);
        }
    }

    /// Shift the position by `delta` seconds, bounded by the track length.
    ///
    /// Returns the new position, or `None` without a current track.
    pub fn seek_by(&mut self, delta: f64) -> Option<f64> {
        let duration = f64::from(self.state.current_track.as_ref()?.duration);
        let target = (self.state.current_time + delta).clamp(0.0, duration);
        self.set_current_time(target);
        Some(self.state.current_time)
    }

    pub fn toggle_shuffle(&mut self) {
        self.state.shuffle = !self.state.shuffle;
        tracing::debug!(shuffle = self.state.shuffle, "Shuffle toggled");
    }

    pub fn toggle_repeat(&mut self) {
        self.state.repeat = self.state.repeat.next();
        tracing::debug!(repeat = ?self.state.repeat, "Repeat cycled");
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::model::random::ScriptedRandom;

    pub(crate) fn track(id: &str, duration: u32) -> Arc<Track> {
        Arc::new(Track {
            id: id.to_string(),
            title: format!("Track {id}"),
            artist: "Artist".to_string(),
            album: "Album".to_string(),
            duration,
            album_art: String::new(),
            audio_url: String::new(),
        })
    }

    fn abc() -> Vec<Arc<Track>> {
        vec![track("A", 200), track("B", 174), track("C", 178)]
    }

    fn current_id<R: RandomSource>(controller: &PlaybackController<R>) -> Option<&str> {
        controller.current_track().map(|t| t.id.as_str())
    }

    #[test]
    fn starts_empty_with_default_volume() {
        let controller = PlaybackController::new();
        assert!(controller.current_track().is_none());
        assert!(!controller.is_playing());
        assert_eq!(controller.volume(), DEFAULT_VOLUME);
        assert_eq!(controller.repeat(), RepeatMode::Off);
        assert!(!controller.shuffle());
    }

    #[test]
    fn set_queue_selects_start_track() {
        let tracks = abc();
        for i in 0..tracks.len() {
            let mut controller = PlaybackController::new();
            controller.set_queue(tracks.clone(), i);
            assert_eq!(controller.current_track(), Some(&tracks[i]));
            assert_eq!(controller.current_index(), i);
        }
    }

    #[test]
    fn set_queue_out_of_range_leaves_no_track() {
        let mut controller = PlaybackController::new();
        controller.set_queue(abc(), 7);
        assert!(controller.current_track().is_none());

        controller.set_queue(Vec::new(), 0);
        assert!(controller.current_track().is_none());
        assert!(controller.queue().is_empty());
    }

    #[test]
    fn set_queue_keeps_elapsed_time() {
        let mut controller = PlaybackController::new();
        controller.set_current_time(42.0);
        controller.set_queue(abc(), 1);
        assert_eq!(controller.current_time(), 42.0);
    }

    #[test]
    fn play_from_rewinds_and_plays() {
        let mut controller = PlaybackController::new();
        controller.set_current_time(42.0);
        controller.play_from(abc(), 2);
        assert_eq!(current_id(&controller), Some("C"));
        assert_eq!(controller.current_time(), 0.0);
        assert!(controller.is_playing());
    }

    #[test]
    fn advance_stops_at_end_without_repeat() {
        let mut controller = PlaybackController::new();
        controller.set_queue(abc(), 0);

        assert!(controller.advance());
        assert_eq!(controller.current_index(), 1);
        assert_eq!(current_id(&controller), Some("B"));

        assert!(controller.advance());
        assert_eq!(controller.current_index(), 2);
        assert_eq!(current_id(&controller), Some("C"));

        controller.set_current_time(12.5);
        assert!(!controller.advance());
        assert_eq!(controller.current_index(), 2);
        assert_eq!(current_id(&controller), Some("C"));
        assert_eq!(controller.current_time(), 12.5);
    }

    #[test]
    fn advance_wraps_with_repeat_playlist() {
        let mut controller = PlaybackController::new();
        controller.set_queue(abc(), 0);
        controller.toggle_repeat();
        assert_eq!(controller.repeat(), RepeatMode::Playlist);

        controller.advance();
        controller.advance();
        assert!(controller.advance());
        assert_eq!(controller.current_index(), 0);
        assert_eq!(current_id(&controller), Some("A"));
    }

    #[test]
    fn advance_repeat_track_stays_and_restarts() {
        let mut controller = PlaybackController::with_random(ScriptedRandom::new([2]));
        controller.set_queue(abc(), 1);
        controller.toggle_repeat();
        controller.toggle_repeat();
        controller.toggle_shuffle();
        assert_eq!(controller.repeat(), RepeatMode::Track);

        controller.set_current_time(90.0);
        assert!(controller.advance());
        assert_eq!(controller.current_index(), 1);
        assert_eq!(controller.current_time(), 0.0);
    }

    #[test]
    fn advance_shuffle_uses_random_source() {
        let mut controller = PlaybackController::with_random(ScriptedRandom::new([2, 0, 0]));
        controller.set_queue(abc(), 0);
        controller.toggle_shuffle();

        controller.set_current_time(10.0);
        assert!(controller.advance());
        assert_eq!(current_id(&controller), Some("C"));
        assert_eq!(controller.current_time(), 0.0);

        assert!(controller.advance());
        assert_eq!(current_id(&controller), Some("A"));

        // Same index again is allowed
        assert!(controller.advance());
        assert_eq!(current_id(&controller), Some("A"));
    }

    #[test]
    fn advance_shuffle_at_end_does_not_stop() {
        let mut controller = PlaybackController::with_random(ScriptedRandom::new([1]));
        controller.set_queue(abc(), 2);
        controller.toggle_shuffle();
        assert!(controller.advance());
        assert_eq!(controller.current_index(), 1);
    }

    #[test]
    fn advance_and_rewind_on_empty_queue_are_noops() {
        let mut controller = PlaybackController::new();
        controller.set_current_time(3.0);
        assert!(!controller.advance());
        assert!(!controller.rewind());
        assert!(controller.current_track().is_none());
        assert_eq!(controller.current_time(), 3.0);
    }

    #[test]
    fn rewind_wraps_to_last() {
        let mut controller = PlaybackController::new();
        controller.set_queue(abc(), 0);
        controller.set_current_time(33.0);

        assert!(controller.rewind());
        assert_eq!(controller.current_index(), 2);
        assert_eq!(current_id(&controller), Some("C"));
        assert_eq!(controller.current_time(), 0.0);

        assert!(controller.rewind());
        assert_eq!(current_id(&controller), Some("B"));
    }

    #[test]
    fn toggle_shuffle_flips() {
        let mut controller = PlaybackController::new();
        controller.toggle_shuffle();
        assert!(controller.shuffle());
        controller.toggle_shuffle();
        assert!(!controller.shuffle());
    }

    #[test]
    fn toggle_repeat_cycles_in_three_calls() {
        let mut controller = PlaybackController::new();
        controller.toggle_repeat();
        assert_eq!(controller.repeat(), RepeatMode::Playlist);
        controller.toggle_repeat();
        assert_eq!(controller.repeat(), RepeatMode::Track);
        controller.toggle_repeat();
        assert_eq!(controller.repeat(), RepeatMode::Off);
    }

    #[test]
    fn setters_store_values() {
        let mut controller = PlaybackController::new();
        controller.set_is_playing(true);
        assert!(controller.is_playing());
        controller.toggle_playing();
        assert!(!controller.is_playing());

        controller.set_current_time(61.5);
        assert_eq!(controller.current_time(), 61.5);
        controller.set_current_time(-4.0);
        assert_eq!(controller.current_time(), 0.0);
        controller.set_current_time(f64::NAN);
        assert_eq!(controller.current_time(), 0.0);

        controller.set_volume(0.25);
        assert_eq!(controller.volume(), 0.25);
        controller.set_volume(1.5);
        assert_eq!(controller.volume(), 1.0);
        controller.set_volume(-0.5);
        assert_eq!(controller.volume(), 0.0);
        controller.set_volume(f64::NAN);
        assert_eq!(controller.volume(), 0.0);
    }

    #[test]
    fn seek_by_clamps_to_track_length() {
        let mut controller = PlaybackController::new();
        assert_eq!(controller.seek_by(5.0), None);

        controller.set_queue(abc(), 1);
        assert_eq!(controller.seek_by(-5.0), Some(0.0));
        assert_eq!(controller.seek_by(100.0), Some(100.0));
        assert_eq!(controller.seek_by(100.0), Some(174.0));
    }

    #[test]
    fn upcoming_lists_tracks_after_current() {
        let mut controller = PlaybackController::new();
        controller.set_queue(abc(), 0);
        let upcoming: Vec<&str> = controller.queue().upcoming().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(upcoming, ["B", "C"]);

        controller.set_queue(abc(), 2);
        assert!(controller.queue().upcoming().is_empty());

        controller.set_queue(abc(), 9);
        assert!(controller.queue().upcoming().is_empty());
    }
}
