//! tunescout Library
//!
//! This library implements a browser for the iTunes song catalog: fetching the
//! catalog through a chain of relay endpoints, filtering and sorting it, and
//! playing short audio previews one at a time.
//!
//! # Modules
//!
//! - `cli` - Command-line presentation layer (table output, interactive shell)
//! - `config` - Configuration management and environment variables
//! - `itunes` - iTunes Search API client with relay fallback
//! - `management` - Session state and playback coordination
//! - `types` - Data structures and type definitions
//! - `utils` - Filtering, collation, sorting and formatting helpers
//!
//! # Example
//!
//! ```
//! use tunescout::{config, itunes::CatalogFetcher, management::SessionController};
//!
//! #[tokio::main]
//! async fn main() -> tunescout::Res<()> {
//!     config::load_env().await?;
//!     let mut session = SessionController::new(CatalogFetcher::new(), "Taylor Swift", 200);
//!     session.refresh().await;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod itunes;
pub mod management;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Uses a boxed dynamic error so that binary-level plumbing can mix error
/// types with `?` while staying `Send + Sync` for async contexts.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Trying {}...", access_path);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Fetched {} songs", count);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only for failures the command line cannot recover from. Session and
/// playback code never call it.
///
/// # Example
///
/// ```
/// error!("Cannot load environment. Err: {}", e);
/// // Program exits here
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable problems: a relay that failed, a preview that could
/// not be played, a command that could not be parsed.
///
/// # Example
///
/// ```
/// warning!("{} failed: {}", access_path, err);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
