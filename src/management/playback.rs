use std::{fmt, io};

use crate::{types::PreviewKey, warning};

#[derive(Debug)]
pub enum PlaybackError {
    Spawn(io::Error),
    Output(String),
}

impl From<io::Error> for PlaybackError {
    fn from(err: io::Error) -> Self {
        PlaybackError::Spawn(err)
    }
}

impl fmt::Display for PlaybackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaybackError::Spawn(e) => write!(f, "cannot start preview player: {}", e),
            PlaybackError::Output(msg) => write!(f, "preview output failed: {}", msg),
        }
    }
}

impl std::error::Error for PlaybackError {}

/// Something an audio output reports on its own, outside of play/stop calls.
#[derive(Debug)]
pub enum OutputEvent {
    Finished(PreviewKey),
    Failed(PreviewKey, PlaybackError),
}

/// The device that actually makes previews audible.
pub trait AudioOutput {
    fn start(&mut self, key: PreviewKey, url: &str) -> Result<(), PlaybackError>;

    fn halt(&mut self, key: PreviewKey);

    /// Returns the next pending end-of-stream or failure, if any.
    fn poll_event(&mut self) -> Option<OutputEvent>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Idle,
    Playing(PreviewKey),
}

/// Single playback slot shared by every song: starting a preview always
/// stops the one before it.
pub struct PlaybackCoordinator<O: AudioOutput> {
    output: O,
    state: PlaybackState,
}

impl<O: AudioOutput> PlaybackCoordinator<O> {
    pub fn new(output: O) -> Self {
        Self {
            output,
            state: PlaybackState::Idle,
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn current(&self) -> Option<PreviewKey> {
        match self.state {
            PlaybackState::Playing(key) => Some(key),
            PlaybackState::Idle => None,
        }
    }

    pub fn is_playing(&self, key: PreviewKey) -> bool {
        self.state == PlaybackState::Playing(key)
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }

    pub fn play(&mut self, key: PreviewKey, url: &str) {
        match self.state {
            PlaybackState::Playing(current) if current == key => return,
            PlaybackState::Playing(current) => {
                self.output.halt(current);
                self.state = PlaybackState::Idle;
            }
            PlaybackState::Idle => {}
        }

        match self.output.start(key, url) {
            Ok(()) => self.state = PlaybackState::Playing(key),
            Err(e) => warning!("Error playing preview {}: {}", key, e),
        }
    }

    pub fn stop(&mut self) {
        if let PlaybackState::Playing(current) = self.state {
            self.output.halt(current);
            self.state = PlaybackState::Idle;
        }
    }

    /// A click on a song: stops it if it is the one playing, plays it
    /// otherwise.
    pub fn toggle(&mut self, key: PreviewKey, url: &str) {
        if self.is_playing(key) {
            self.stop();
        } else {
            self.play(key, url);
        }
    }

    pub fn natural_end(&mut self, key: PreviewKey) {
        // ignore ends reported for a preview that was already replaced
        if self.is_playing(key) {
            self.state = PlaybackState::Idle;
        }
    }

    pub fn playback_error(&mut self, key: PreviewKey, err: PlaybackError) {
        warning!("Error playing preview {}: {}", key, err);
        if self.is_playing(key) {
            self.output.halt(key);
            self.state = PlaybackState::Idle;
        }
    }

    /// Drains events from the output and applies them.
    pub fn poll(&mut self) {
        while let Some(event) = self.output.poll_event() {
            match event {
                OutputEvent::Finished(key) => self.natural_end(key),
                OutputEvent::Failed(key, err) => self.playback_error(key, err),
            }
        }
    }
}
