#![cfg(unix)]

use std::time::{Duration, Instant};

use tunescout::management::{
    AudioOutput, OutputEvent, PlaybackCoordinator, PlaybackError, PlaybackState, ProcessOutput,
};
use tunescout::types::PreviewKey;

// Polls until the output reports something or the deadline passes
fn wait_for_event(output: &mut ProcessOutput) -> Option<OutputEvent> {
    let deadline = Instant::now() + Duration::from_secs(5);
    while Instant::now() < deadline {
        if let Some(event) = output.poll_event() {
            return Some(event);
        }
        std::thread::sleep(Duration::from_millis(20));
    }
    None
}

#[test]
fn test_player_exit_is_natural_end() {
    let mut output = ProcessOutput::new("sleep");
    // the "URL" is the last argument, so this runs `sleep 0`
    output.start(PreviewKey(1), "0").unwrap();

    match wait_for_event(&mut output) {
        Some(OutputEvent::Finished(key)) => assert_eq!(key, PreviewKey(1)),
        other => panic!("expected Finished, got {:?}", other),
    }
    assert!(output.poll_event().is_none());
}

#[test]
fn test_player_failure_is_reported() {
    let mut output = ProcessOutput::new("false");
    output.start(PreviewKey(2), "https://example.com/2.m4a").unwrap();

    match wait_for_event(&mut output) {
        Some(OutputEvent::Failed(key, PlaybackError::Output(_))) => assert_eq!(key, PreviewKey(2)),
        other => panic!("expected Failed, got {:?}", other),
    }
}

#[test]
fn test_halt_kills_running_player() {
    let mut output = ProcessOutput::new("sleep");
    output.start(PreviewKey(3), "30").unwrap();

    output.halt(PreviewKey(3));

    assert!(output.poll_event().is_none());
}

#[test]
fn test_missing_player_fails_to_start() {
    let mut output = ProcessOutput::new("tunescout-no-such-player-binary");
    let result = output.start(PreviewKey(4), "https://example.com/4.m4a");
    assert!(matches!(result, Err(PlaybackError::Spawn(_))));

    let mut output = ProcessOutput::new("   ");
    let result = output.start(PreviewKey(4), "https://example.com/4.m4a");
    assert!(matches!(result, Err(PlaybackError::Output(_))));
}

#[test]
fn test_coordinator_with_process_output() {
    let mut playback = PlaybackCoordinator::new(ProcessOutput::new("sleep"));

    playback.play(PreviewKey(5), "30");
    playback.play(PreviewKey(6), "0");
    assert_eq!(playback.current(), Some(PreviewKey(6)));

    let deadline = Instant::now() + Duration::from_secs(5);
    while playback.current().is_some() && Instant::now() < deadline {
        playback.poll();
        std::thread::sleep(Duration::from_millis(20));
    }
    assert_eq!(playback.state(), PlaybackState::Idle);

    // a player that cannot be spawned leaves the slot idle
    let mut playback = PlaybackCoordinator::new(ProcessOutput::new("tunescout-no-such-player-binary"));
    playback.play(PreviewKey(7), "https://example.com/7.m4a");
    assert_eq!(playback.state(), PlaybackState::Idle);
}
