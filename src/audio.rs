//! Simulated media engine
//!
//! Stands in for a real audio element: it is told which track to load and
//! whether to play, keeps its own clock, and reports position changes and
//! end-of-track back over a channel. It never touches the playback state
//! itself; the controller routes its events into the model.
//!
//! Every `Load` carries a `load_id` and every event is stamped with the id of
//! the load it was produced for, so events still in flight after the next
//! load can be told apart and dropped.

use std::time::Duration;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

pub const DEFAULT_TICK: Duration = Duration::from_millis(250);

/// Instructions sent from the controller to the engine
#[derive(Clone, Debug, PartialEq)]
pub enum EngineCommand {
    Load { load_id: u64, track_id: String, duration: f64 },
    Unload,
    Play,
    Pause,
    Seek(f64),
    SetVolume(f64),
    Shutdown,
}

/// Notifications sent from the engine back to the controller
#[derive(Clone, Debug, PartialEq)]
pub enum PlayerEvent {
    PositionChanged { load_id: u64, position: f64 },
    EndOfTrack { load_id: u64 },
}

impl PlayerEvent {
    /// Id of the `Load` this event belongs to
    pub fn load_id(&self) -> u64 {
        match self {
            PlayerEvent::PositionChanged { load_id, .. }
            | PlayerEvent::EndOfTrack { load_id } => *load_id,
        }
    }
}

/// Position bookkeeping for the loaded track, advanced by explicit elapsed time.
#[derive(Clone, Debug, Default)]
pub struct EngineClock {
    load_id: u64,
    track_id: Option<String>,
    position: f64,
    duration: f64,
    playing: bool,
    ended: bool,
    volume: f64,
}

impl EngineClock {
    pub fn apply(&mut self, command: EngineCommand) {
        match command {
            EngineCommand::Load { load_id, track_id, duration } => {
                self.load_id = load_id;
                self.track_id = Some(track_id);
                self.duration = duration.max(0.0);
                self.position = 0.0;
                self.ended = false;
            }
            EngineCommand::Unload => {
                self.track_id = None;
                self.position = 0.0;
                self.duration = 0.0;
                self.playing = false;
                self.ended = false;
            }
            EngineCommand::Play => {
                if self.ended {
                    self.position = 0.0;
                    self.ended = false;
                }
                self.playing = true;
            }
            EngineCommand::Pause => self.playing = false,
            EngineCommand::Seek(position) => {
                self.position = position.clamp(0.0, self.duration);
                self.ended = false;
            }
            EngineCommand::SetVolume(volume) => self.volume = volume,
            EngineCommand::Shutdown => self.playing = false,
        }
    }

    /// Advance by `elapsed` and collect the resulting events.
    ///
    /// Nothing happens while paused or with no track loaded.
    pub fn tick(&mut self, elapsed: Duration) -> Vec<PlayerEvent> {
        if !self.playing || self.track_id.is_none() {
            return Vec::new();
        }

        self.position = (self.position + elapsed.as_secs_f64()).min(self.duration);
        let mut events = vec![PlayerEvent::PositionChanged {
            load_id: self.load_id,
            position: self.position,
        }];

        if self.position >= self.duration && !self.ended {
            self.ended = true;
            self.playing = false;
            events.push(PlayerEvent::EndOfTrack { load_id: self.load_id });
        }
        events
    }

    pub fn load_id(&self) -> u64 {
        self.load_id
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }
}

/// Owning handle to a running engine task
pub struct EngineHandle {
    commands: UnboundedSender<EngineCommand>,
    events: UnboundedReceiver<PlayerEvent>,
    task: Option<JoinHandle<()>>,
}

impl EngineHandle {
    /// Spawn the engine on the current tokio runtime.
    pub fn spawn(tick: Duration) -> Self {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let task = tokio::spawn(run_engine(command_rx, event_tx, tick));
        tracing::info!(tick_ms = tick.as_millis() as u64, "Media engine started");

        Self {
            commands: command_tx,
            events: event_rx,
            task: Some(task),
        }
    }

    /// Handle with no engine behind it; the caller plays the engine's part.
    #[cfg(test)]
    pub fn detached() -> (Self, UnboundedReceiver<EngineCommand>, UnboundedSender<PlayerEvent>) {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let handle = Self {
            commands: command_tx,
            events: event_rx,
            task: None,
        };
        (handle, command_rx, event_tx)
    }

    pub fn send(&self, command: EngineCommand) {
        tracing::trace!(?command, "Engine command");
        if let Err(e) = self.commands.send(command) {
            tracing::warn!(command = ?e.0, "Media engine is gone, command dropped");
        }
    }

    /// Next pending event, without waiting
    pub fn try_next_event(&mut self) -> Option<PlayerEvent> {
        self.events.try_recv().ok()
    }

    pub async fn shutdown(self) {
        self.send(EngineCommand::Shutdown);
        if let Some(task) = self.task {
            if let Err(e) = task.await {
                tracing::warn!(error = %e, "Media engine task ended abnormally");
            }
        }
        tracing::debug!("Media engine stopped");
    }
}

async fn run_engine(
    mut commands: UnboundedReceiver<EngineCommand>,
    events: UnboundedSender<PlayerEvent>,
    tick: Duration,
) {
    let mut clock = EngineClock::default();
    let mut interval = tokio::time::interval(tick);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut last_tick = Instant::now();

    loop {
        tokio::select! {
            command = commands.recv() => {
                let Some(command) = command else { break };
                if command == EngineCommand::Shutdown {
                    break;
                }
                if command == EngineCommand::Play {
                    // paused time must not count toward the position
                    last_tick = Instant::now();
                }
                clock.apply(command);
                tracing::trace!(
                    load_id = clock.load_id(),
                    position = clock.position(),
                    playing = clock.is_playing(),
                    volume = clock.volume(),
                    "Engine state"
                );
            }
            _ = interval.tick() => {
                let now = Instant::now();
                let elapsed = now - last_tick;
                last_tick = now;

                for event in clock.tick(elapsed) {
                    if events.send(event).is_err() {
                        return;
                    }
                }
            }
        }
    }
}
