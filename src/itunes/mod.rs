//! # iTunes Integration Module
//!
//! This module retrieves the song catalog from the public iTunes Search API.
//! The API is never called directly: every request goes through one of several
//! relay endpoints ("access paths"), and the fetcher falls back from one relay
//! to the next until one of them returns a usable result.
//!
//! ## Architecture
//!
//! ```text
//! Session Controller
//!          ↓
//! CatalogFetcher (ordered fallback loop)
//!     ├── allorigins  (JSON envelope around the upstream body)
//!     ├── corsproxy   (upstream body as-is)
//!     └── codetabs    (upstream body as-is)
//!          ↓
//! HTTP Layer (reqwest)
//!          ↓
//! iTunes Search API
//! ```
//!
//! ## Core Modules
//!
//! ### Access Paths
//!
//! [`relay`] - Describes each relay as data: a URL prefix that wraps the
//! encoded target URL, and the [`ResponseShape`] telling the fetcher how to
//! unwrap the relay's response body. Adding a relay means adding a
//! descriptor, not another code path.
//!
//! ### Catalog Search
//!
//! [`search`] - Implements [`CatalogFetcher`], the single loop that walks the
//! access paths in order, and the [`CatalogSource`] seam used by the session
//! controller.
//!
//! ### Errors
//!
//! [`error`] - [`AccessPathError`] describes why a single relay failed and is
//! absorbed by the fallback loop. [`FetchError`] is returned only when every
//! relay failed and is the one error that reaches the user.
//!
//! ## Fallback Policy
//!
//! - **Sequential**: relays are tried one at a time, in a fixed order
//! - **No Retries**: a failing relay is never retried within one fetch
//! - **Strict Success**: a relay only succeeds with a successful HTTP status,
//!   a well-formed body and at least one result
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tunescout::itunes::CatalogFetcher;
//!
//! let fetcher = CatalogFetcher::new();
//! let songs = fetcher.fetch_catalog("Taylor Swift", 200).await?;
//! ```

pub mod error;
pub mod relay;
pub mod search;

pub use error::{AccessPathError, FailedAttempt, FetchError};
pub use relay::{AccessPath, ResponseShape, default_access_paths};
pub use search::{CatalogFetcher, CatalogSource};
