use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::{
    cli::{list::load_with_spinner, render::print_view},
    info,
    itunes::{CatalogFetcher, CatalogSource},
    management::{AudioOutput, PlaybackCoordinator, ProcessOutput, SessionController},
    success,
    types::SortCriterion,
    utils, warning,
};

/// One line typed into the interactive shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Search(String),
    Clear,
    Sort(SortCriterion),
    Reverse,
    Refresh,
    Play(usize),
    Stop,
    Open(usize),
    Show,
    Help,
    Quit,
    Nothing,
}

impl ShellCommand {
    /// Parses a shell line. Rows are 1-based, as printed in the table.
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_ascii_lowercase().as_str() {
            "" => Ok(ShellCommand::Nothing),
            "search" | "s" | "/" => {
                if rest.is_empty() {
                    Ok(ShellCommand::Clear)
                } else {
                    Ok(ShellCommand::Search(rest.to_string()))
                }
            }
            "clear" => Ok(ShellCommand::Clear),
            "sort" => utils::parse_sort_criterion(rest).map(ShellCommand::Sort),
            "reverse" | "r" => Ok(ShellCommand::Reverse),
            "refresh" => Ok(ShellCommand::Refresh),
            "play" | "p" => parse_row(rest).map(ShellCommand::Play),
            "stop" => Ok(ShellCommand::Stop),
            "open" | "o" => parse_row(rest).map(ShellCommand::Open),
            "show" | "ls" => Ok(ShellCommand::Show),
            "help" | "?" => Ok(ShellCommand::Help),
            "quit" | "exit" | "q" => Ok(ShellCommand::Quit),
            other => Err(format!("unknown command '{}'; type `help`", other)),
        }
    }
}

fn parse_row(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(row) if row > 0 => Ok(row),
        _ => Err(format!("invalid row '{}'; expected a number from the table", s)),
    }
}

const HELP: &str = "\
Commands:
  search <text>       filter by track or album name (alias: s)
  clear               remove the filter
  sort track|album    choose the sort field
  reverse             toggle ascending/descending (alias: r)
  refresh             fetch the catalog again
  play <row>          play or stop the preview of a row (alias: p)
  stop                stop the current preview
  open <row>          open the song's store page in the browser (alias: o)
  show                print the table again (alias: ls)
  help                show this help
  quit                leave (alias: q)";

/// Runs the interactive catalog browser until `quit` or end of input.
pub async fn browse(term: String, limit: u32) {
    let mut session = SessionController::new(CatalogFetcher::new(), term, limit);
    let mut playback = PlaybackCoordinator::new(ProcessOutput::from_config());

    load_with_spinner(&mut session).await;
    print_view(&session.view(), playback.current());
    info!("Type `help` for a list of commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut ticker = tokio::time::interval(Duration::from_millis(500));

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let line = match line {
                    Ok(Some(line)) => line,
                    Ok(None) => break,
                    Err(e) => {
                        warning!("Cannot read input. Err: {}", e);
                        break;
                    }
                };

                poll_playback(&mut playback);
                match ShellCommand::parse(&line) {
                    Ok(ShellCommand::Quit) => break,
                    Ok(command) => run_command(command, &mut session, &mut playback).await,
                    Err(e) => warning!("{}", e),
                }
            }
            _ = ticker.tick() => poll_playback(&mut playback),
        }
    }

    playback.stop();
}

fn poll_playback<O: AudioOutput>(playback: &mut PlaybackCoordinator<O>) {
    let before = playback.current();
    playback.poll();
    if before.is_some() && playback.current().is_none() {
        info!("Preview finished.");
    }
}

async fn run_command<S: CatalogSource, O: AudioOutput>(
    command: ShellCommand,
    session: &mut SessionController<S>,
    playback: &mut PlaybackCoordinator<O>,
) {
    match command {
        ShellCommand::Search(query) => session.set_query(query),
        ShellCommand::Clear => session.clear_query(),
        ShellCommand::Sort(criterion) => session.set_sort_criterion(criterion),
        ShellCommand::Reverse => session.toggle_sort_direction(),
        ShellCommand::Refresh => {
            playback.stop();
            load_with_spinner(session).await;
        }
        ShellCommand::Play(row) => {
            toggle_preview(row, session, playback);
            return;
        }
        ShellCommand::Stop => {
            playback.stop();
            return;
        }
        ShellCommand::Open(row) => {
            open_store_page(row, session);
            return;
        }
        ShellCommand::Help => {
            println!("{}", HELP);
            return;
        }
        ShellCommand::Show => {}
        ShellCommand::Quit | ShellCommand::Nothing => return,
    }

    print_view(&session.view(), playback.current());
}

fn toggle_preview<S: CatalogSource, O: AudioOutput>(
    row: usize,
    session: &SessionController<S>,
    playback: &mut PlaybackCoordinator<O>,
) {
    let view = session.view();
    let Some(song) = view.songs.get(row - 1) else {
        warning!("There is no row {}.", row);
        return;
    };
    let Some(url) = song.preview_url.as_deref() else {
        warning!("\"{}\" has no preview.", song.track_name);
        return;
    };

    let was_playing = playback.is_playing(song.key());
    playback.toggle(song.key(), url);
    if playback.is_playing(song.key()) {
        success!("Playing preview: {} - {}", song.track_name, song.artist_name);
    } else if was_playing {
        info!("Preview stopped.");
    }
}

fn open_store_page<S: CatalogSource>(row: usize, session: &SessionController<S>) {
    let view = session.view();
    let Some(song) = view.songs.get(row - 1) else {
        warning!("There is no row {}.", row);
        return;
    };
    let Some(url) = song.track_view_url.as_deref() else {
        warning!("\"{}\" has no store page.", song.track_name);
        return;
    };

    if let Err(e) = webbrowser::open(url) {
        warning!("Cannot open browser. Open this URL manually: {}. Err: {}", url, e);
    }
}
