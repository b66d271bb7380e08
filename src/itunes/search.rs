use std::future::Future;

use reqwest::Client;

use crate::{
    config, info,
    itunes::{
        error::{AccessPathError, FailedAttempt, FetchError},
        relay::{AccessPath, default_access_paths},
    },
    success,
    types::Song,
    warning,
};

/// Anything that can produce a catalog for a search term.
///
/// [`CatalogFetcher`] is the real implementation; the session controller is
/// generic over this trait so it can be driven by other sources.
pub trait CatalogSource {
    fn fetch(
        &self,
        term: &str,
        limit: u32,
    ) -> impl Future<Output = Result<Vec<Song>, FetchError>> + Send;
}

/// Client for the iTunes Search API with ordered fallback across relays.
#[derive(Debug, Clone)]
pub struct CatalogFetcher {
    client: Client,
    search_url: String,
    access_paths: Vec<AccessPath>,
}

impl Default for CatalogFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogFetcher {
    /// Creates a fetcher for the configured search URL using the default
    /// relays.
    pub fn new() -> Self {
        Self::with_access_paths(config::search_url(), default_access_paths())
    }

    pub fn with_access_paths(search_url: impl Into<String>, access_paths: Vec<AccessPath>) -> Self {
        Self {
            client: Client::new(),
            search_url: search_url.into(),
            access_paths,
        }
    }

    pub fn access_paths(&self) -> &[AccessPath] {
        &self.access_paths
    }

    /// Builds the upstream search URL that the relays are asked to fetch.
    pub fn target_url(&self, term: &str, limit: u32) -> String {
        format!(
            "{uri}?term={term}&limit={limit}&media=music",
            uri = self.search_url,
            term = urlencoding::encode(term),
            limit = limit
        )
    }

    /// Fetches songs matching `term` from the iTunes Search API.
    ///
    /// Walks the configured access paths strictly in order and returns the
    /// results of the first one that succeeds. A path succeeds only if the
    /// relay answers with a success status, its body unwraps into a search
    /// response, and that response holds at least one song.
    ///
    /// # Arguments
    ///
    /// * `term` - Free-text search term, percent-encoded into the target URL
    /// * `limit` - Maximum number of results requested from the API
    ///
    /// # Returns
    ///
    /// Returns a `Result` containing:
    /// - `Ok(Vec<Song>)` - The songs from the first successful access path
    /// - `Err(FetchError)` - Every access path failed; the error lists each attempt
    ///
    /// # Fallback Behavior
    ///
    /// Failures of a single path (transport errors, error statuses, malformed
    /// bodies, empty result lists) are logged as warnings and the next path is
    /// tried. There are no retries within a path, and paths are never queried
    /// in parallel.
    ///
    /// # Example
    ///
    /// ```
    /// let fetcher = CatalogFetcher::new();
    /// match fetcher.fetch_catalog("Taylor Swift", 200).await {
    ///     Ok(songs) => println!("Fetched {} songs", songs.len()),
    ///     Err(e) => eprintln!("{}", e),
    /// }
    /// ```
    pub async fn fetch_catalog(&self, term: &str, limit: u32) -> Result<Vec<Song>, FetchError> {
        let target = self.target_url(term, limit);
        info!("Fetching from iTunes API: {}", target);

        let mut attempts = Vec::with_capacity(self.access_paths.len());
        for path in &self.access_paths {
            info!("Trying {}...", path.name);
            match self.try_access_path(path, &target).await {
                Ok(songs) => {
                    success!("Fetched {} songs via {}", songs.len(), path.name);
                    return Ok(songs);
                }
                Err(e) => {
                    warning!("{} failed: {}", path.name, e);
                    attempts.push(FailedAttempt {
                        access_path: path.name.clone(),
                        error: e,
                    });
                }
            }
        }

        Err(FetchError::new(attempts))
    }

    async fn try_access_path(
        &self,
        path: &AccessPath,
        target: &str,
    ) -> Result<Vec<Song>, AccessPathError> {
        let response = self.client.get(path.wrap(target)).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AccessPathError::Status(status));
        }

        let body = response.text().await?;
        let parsed = path.shape.unwrap_body(&body)?;
        if parsed.results.is_empty() {
            return Err(AccessPathError::EmptyResult);
        }

        Ok(parsed.results)
    }
}

impl CatalogSource for CatalogFetcher {
    async fn fetch(&self, term: &str, limit: u32) -> Result<Vec<Song>, FetchError> {
        self.fetch_catalog(term, limit).await
    }
}
