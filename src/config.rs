//! Configuration management for tunescout.
//!
//! Configuration values come from environment variables, optionally seeded
//! from a `.env` file in the local data directory. Every value has a default,
//! so the application runs without any configuration at all.
//!
//! The lookup order is:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Built-in defaults

use std::{env, path::PathBuf};

pub const DEFAULT_SEARCH_TERM: &str = "Taylor Swift";
pub const DEFAULT_SEARCH_LIMIT: u32 = 200;
pub const DEFAULT_SEARCH_URL: &str = "https://itunes.apple.com/search";
pub const DEFAULT_PREVIEW_PLAYER: &str = "ffplay -nodisp -autoexit -loglevel quiet";

/// Loads environment variables from `tunescout/.env` in the local data
/// directory, if that file exists.
///
/// The directory is created on first use so users know where to put the
/// file:
/// - Linux: `~/.local/share/tunescout/.env`
/// - macOS: `~/Library/Application Support/tunescout/.env`
/// - Windows: `%LOCALAPPDATA%/tunescout/.env`
///
/// Variables already present in the environment are not overridden.
///
/// # Errors
///
/// Returns an error string if the directory cannot be created or an existing
/// `.env` file cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let path = env_file_path();
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

pub fn env_file_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("tunescout/.env");
    path
}

/// Search term used for the initial catalog load (`TUNESCOUT_SEARCH_TERM`).
pub fn search_term() -> String {
    env::var("TUNESCOUT_SEARCH_TERM")
        .ok()
        .filter(|term| !term.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_SEARCH_TERM.to_string())
}

/// Number of results requested from the API (`TUNESCOUT_SEARCH_LIMIT`).
///
/// Unparsable or zero values fall back to the default.
pub fn search_limit() -> u32 {
    env::var("TUNESCOUT_SEARCH_LIMIT")
        .ok()
        .and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|limit| *limit > 0)
        .unwrap_or(DEFAULT_SEARCH_LIMIT)
}

/// Base URL of the iTunes search endpoint (`TUNESCOUT_SEARCH_URL`).
pub fn search_url() -> String {
    env::var("TUNESCOUT_SEARCH_URL").unwrap_or_else(|_| DEFAULT_SEARCH_URL.to_string())
}

/// Command line of the external player used for previews
/// (`TUNESCOUT_PREVIEW_PLAYER`). The preview URL is appended as the last
/// argument.
pub fn preview_player() -> String {
    env::var("TUNESCOUT_PREVIEW_PLAYER").unwrap_or_else(|_| DEFAULT_PREVIEW_PLAYER.to_string())
}
