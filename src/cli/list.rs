use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    cli::render::print_view,
    error,
    itunes::{CatalogFetcher, CatalogSource},
    management::SessionController,
    types::{SortCriterion, SortDirection},
};

/// Fetches the catalog once and prints the filtered, sorted view.
///
/// Exits with an error when no access path could deliver the catalog.
pub async fn list_songs(
    term: String,
    limit: u32,
    search: Option<String>,
    sort: SortCriterion,
    direction: SortDirection,
) {
    let mut session = SessionController::new(CatalogFetcher::new(), term, limit);
    load_with_spinner(&mut session).await;

    if let Some(message) = session.error_message() {
        error!("{}", message);
    }

    if let Some(query) = search {
        session.set_query(query);
    }
    session.set_sort_criterion(sort);
    if direction != session.sort_direction() {
        session.toggle_sort_direction();
    }

    print_view(&session.view(), None);
}

pub(crate) async fn load_with_spinner<S: CatalogSource>(session: &mut SessionController<S>) {
    let pb = ProgressBar::new_spinner();
    pb.set_message(format!("Fetching songs for \"{}\"...", session.search_term()));
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    session.refresh().await;
    pb.finish_and_clear();
}
