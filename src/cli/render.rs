use tabled::Table;

use crate::{
    info, management::SessionView, types::PreviewKey, utils::song_table_rows, warning,
};

pub fn print_view(view: &SessionView<'_>, playing: Option<PreviewKey>) {
    if view.loading {
        info!("Loading songs...");
        return;
    }

    if let Some(message) = view.error_message {
        warning!("{}", message);
        return;
    }

    if view.songs.is_empty() {
        if view.query.trim().is_empty() {
            warning!("No songs loaded.");
        } else {
            warning!("No songs match \"{}\".", view.query.trim());
        }
        return;
    }

    let table = Table::new(song_table_rows(&view.songs, playing));
    println!("{}", table);

    info!(
        "Showing {} of {} songs, sorted by {} ({})",
        view.filtered_count, view.total_count, view.sort_criterion, view.sort_direction
    );
    if !view.query.trim().is_empty() {
        info!("Filter: \"{}\"", view.query.trim());
    }
}
