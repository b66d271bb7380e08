mod output;
mod playback;
mod session;

pub use output::ProcessOutput;
pub use playback::AudioOutput;
pub use playback::OutputEvent;
pub use playback::PlaybackCoordinator;
pub use playback::PlaybackError;
pub use playback::PlaybackState;
pub use session::SessionController;
pub use session::SessionView;
pub use session::derive_view;
