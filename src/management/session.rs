use crate::{
    itunes::{CatalogSource, FetchError},
    types::{PreviewKey, Song, SortCriterion, SortDirection},
    utils::{filter_songs, sort_songs},
};

/// Filters `catalog` by `query` and orders the survivors.
pub fn derive_view<'a>(
    catalog: &'a [Song],
    query: &str,
    criterion: SortCriterion,
    direction: SortDirection,
) -> Vec<&'a Song> {
    let filtered = filter_songs(catalog, query);
    sort_songs(&filtered, criterion, direction)
}

/// Everything the presentation layer needs to draw one frame.
#[derive(Debug)]
pub struct SessionView<'a> {
    pub songs: Vec<&'a Song>,
    pub loading: bool,
    pub error_message: Option<&'a str>,
    pub query: &'a str,
    pub sort_criterion: SortCriterion,
    pub sort_direction: SortDirection,
    pub total_count: usize,
    pub filtered_count: usize,
}

pub struct SessionController<S: CatalogSource> {
    source: S,
    search_term: String,
    limit: u32,
    catalog: Vec<Song>,
    query: String,
    sort_criterion: SortCriterion,
    sort_direction: SortDirection,
    loading: bool,
    error_message: Option<String>,
}

impl<S: CatalogSource> SessionController<S> {
    pub fn new(source: S, search_term: impl Into<String>, limit: u32) -> Self {
        Self {
            source,
            search_term: search_term.into(),
            limit,
            catalog: Vec::new(),
            query: String::new(),
            sort_criterion: SortCriterion::default(),
            sort_direction: SortDirection::default(),
            loading: false,
            error_message: None,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn catalog(&self) -> &[Song] {
        &self.catalog
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn sort_criterion(&self) -> SortCriterion {
        self.sort_criterion
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    pub fn set_sort_criterion(&mut self, criterion: SortCriterion) {
        self.sort_criterion = criterion;
    }

    pub fn toggle_sort_direction(&mut self) {
        self.sort_direction = self.sort_direction.toggled();
    }

    /// Fetches a fresh catalog from the source, replacing the current one.
    ///
    /// On failure the catalog is emptied and the error message is set. The
    /// loading flag is cleared either way.
    pub async fn refresh(&mut self) {
        self.begin_refresh();
        let result = self.source.fetch(&self.search_term, self.limit).await;
        self.finish_refresh(result);
    }

    pub fn begin_refresh(&mut self) {
        self.loading = true;
        self.error_message = None;
    }

    /// Applies the outcome of a fetch. When several fetches overlap, the one
    /// applied last wins.
    pub fn finish_refresh(&mut self, result: Result<Vec<Song>, FetchError>) {
        match result {
            Ok(songs) => {
                self.catalog = songs;
                self.error_message = None;
            }
            Err(e) => {
                self.catalog = Vec::new();
                self.error_message = Some(e.to_string());
            }
        }
        self.loading = false;
    }

    pub fn view(&self) -> SessionView<'_> {
        let songs = derive_view(
            &self.catalog,
            &self.query,
            self.sort_criterion,
            self.sort_direction,
        );
        SessionView {
            filtered_count: songs.len(),
            songs,
            loading: self.loading,
            error_message: self.error_message.as_deref(),
            query: &self.query,
            sort_criterion: self.sort_criterion,
            sort_direction: self.sort_direction,
            total_count: self.catalog.len(),
        }
    }

    pub fn song(&self, key: PreviewKey) -> Option<&Song> {
        self.catalog.iter().find(|song| song.key() == key)
    }
}
