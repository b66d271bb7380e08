use std::process::{Child, Command, Stdio};

use crate::{
    config,
    management::playback::{AudioOutput, OutputEvent, PlaybackError},
    types::PreviewKey,
};

/// Plays previews through an external command line player, one child
/// process per preview.
pub struct ProcessOutput {
    program: Option<String>,
    args: Vec<String>,
    child: Option<(PreviewKey, Child)>,
}

impl ProcessOutput {
    pub fn new(command_line: &str) -> Self {
        let mut parts = command_line.split_whitespace().map(str::to_string);
        Self {
            program: parts.next(),
            args: parts.collect(),
            child: None,
        }
    }

    pub fn from_config() -> Self {
        Self::new(&config::preview_player())
    }

    fn kill_child(&mut self) {
        if let Some((_, mut child)) = self.child.take() {
            let _ = child.kill();
            let _ = child.wait();
        }
    }
}

impl AudioOutput for ProcessOutput {
    fn start(&mut self, key: PreviewKey, url: &str) -> Result<(), PlaybackError> {
        self.kill_child();

        let program = self
            .program
            .as_deref()
            .ok_or_else(|| PlaybackError::Output("no preview player configured".into()))?;

        let child = Command::new(program)
            .args(&self.args)
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        self.child = Some((key, child));
        Ok(())
    }

    fn halt(&mut self, key: PreviewKey) {
        if matches!(&self.child, Some((current, _)) if *current == key) {
            self.kill_child();
        }
    }

    fn poll_event(&mut self) -> Option<OutputEvent> {
        let (key, child) = self.child.as_mut()?;
        let key = *key;

        let event = match child.try_wait() {
            Ok(None) => return None,
            Ok(Some(status)) if status.success() => OutputEvent::Finished(key),
            Ok(Some(status)) => OutputEvent::Failed(
                key,
                PlaybackError::Output(format!("player exited with {}", status)),
            ),
            Err(e) => OutputEvent::Failed(key, PlaybackError::Spawn(e)),
        };

        self.child = None;
        Some(event)
    }
}

impl Drop for ProcessOutput {
    fn drop(&mut self) {
        self.kill_child();
    }
}
