//! Background music driven by game events
//!
//! The simulation never plays sound itself. It emits [`GameEvent`]s and the
//! [`Soundtrack`] turns them into play/pause/restart commands for whatever
//! backend the host provides. Commands are fire-and-forget.

use crate::sim::GameEvent;

/// Command sent to the host's audio backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MusicCommand {
    /// Start (or resume) the looping track
    Play,
    Pause,
    /// Rewind to the start and play
    Restart,
}

/// Host audio backend
pub trait MusicBackend {
    fn execute(&mut self, command: MusicCommand);
}

/// Backend that drops every command (headless runs)
#[derive(Debug, Default)]
pub struct Silent;

impl MusicBackend for Silent {
    fn execute(&mut self, _command: MusicCommand) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TrackState {
    /// Waiting for the first input (browsers block autoplay)
    Idle,
    Playing,
    Paused,
}

/// Looping background track state machine
#[derive(Debug)]
pub struct Soundtrack<B: MusicBackend> {
    backend: B,
    state: TrackState,
    muted: bool,
}

impl<B: MusicBackend> Soundtrack<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            state: TrackState::Idle,
            muted: false,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn is_playing(&self) -> bool {
        self.state == TrackState::Playing
    }

    /// Mute pauses the track; unmute resumes it if it was playing
    pub fn set_muted(&mut self, muted: bool) {
        if self.muted == muted {
            return;
        }
        self.muted = muted;
        if self.state == TrackState::Playing {
            let command = if muted { MusicCommand::Pause } else { MusicCommand::Play };
            self.backend.execute(command);
        }
    }

    /// React to one game event; returns the command issued, if any
    pub fn handle(&mut self, event: GameEvent) -> Option<MusicCommand> {
        let (next, command) = match (self.state, event) {
            (TrackState::Idle, GameEvent::GameStarted) => (TrackState::Playing, MusicCommand::Play),
            (TrackState::Playing, GameEvent::GameOver { .. }) => {
                (TrackState::Paused, MusicCommand::Pause)
            }
            (_, GameEvent::Reset) => (TrackState::Playing, MusicCommand::Restart),
            _ => return None,
        };
        self.state = next;
        if self.muted {
            return None;
        }
        log::debug!("Music: {command:?}");
        self.backend.execute(command);
        Some(command)
    }
}
