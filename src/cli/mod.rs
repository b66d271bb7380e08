//! # CLI Module
//!
//! This module is the presentation layer of tunescout. It owns no state of its
//! own: it builds a [`SessionController`](crate::management::SessionController)
//! and a [`PlaybackCoordinator`](crate::management::PlaybackCoordinator),
//! turns user input into their intents, and prints the resulting view.
//!
//! ## Commands
//!
//! - [`list_songs`] - Fetches the catalog once and prints the filtered, sorted
//!   table. Used by `tunescout list`.
//! - [`browse`] - Interactive shell on top of a live session: search, sort,
//!   refresh and play previews without leaving the terminal. Used by
//!   `tunescout browse`.
//!
//! ## Output
//!
//! Songs are printed as a table (tabled) followed by a summary line with the
//! number of visible songs, the catalog size and the sort order. Status lines
//! use the crate's `info!`/`success!`/`warning!` macros; catalog fetches show
//! a spinner while the access paths are tried.
//!
//! ## Usage Patterns
//!
//! ```bash
//! tunescout list                                 # default catalog, by track name
//! tunescout list --search love --sort album      # filtered, by album
//! tunescout list --term "Phoebe Bridgers" --desc # another catalog, descending
//! tunescout browse                               # interactive shell
//! ```

mod browse;
mod list;
mod render;

pub use browse::ShellCommand;
pub use browse::browse;
pub use list::list_songs;
pub use render::print_view;
