use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate};
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

use crate::types::{PreviewKey, Song, SongTableRow, SortCriterion, SortDirection};

/// Returns the songs whose track or album name contains `query`.
///
/// Matching folds ASCII case only. A blank query keeps every song. The
/// result is always in the same relative order as `songs`.
pub fn filter_songs<'a>(songs: &'a [Song], query: &str) -> Vec<&'a Song> {
    let term = query.trim();
    if term.is_empty() {
        return songs.iter().collect();
    }

    let term = term.to_ascii_lowercase();
    songs
        .iter()
        .filter(|song| {
            let track = song.track_name.to_ascii_lowercase();
            let album = song.collection_name.to_ascii_lowercase();
            track.starts_with(&term)
                || album.starts_with(&term)
                || track.contains(&term)
                || album.contains(&term)
        })
        .collect()
}

/// Returns a newly ordered copy of `songs`; the input slice is left alone.
///
/// The underlying sort is stable, so songs whose keys collate equal keep
/// their input order in both directions.
pub fn sort_songs<'a>(
    songs: &[&'a Song],
    criterion: SortCriterion,
    direction: SortDirection,
) -> Vec<&'a Song> {
    let mut sorted = songs.to_vec();
    if sorted.len() <= 1 {
        return sorted;
    }

    sorted.sort_by(|a, b| {
        let ord = compare_natural(criterion.field(a), criterion.field(b));
        match direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
    sorted
}

/// Collates two strings ignoring case and accents, comparing runs of digits
/// by their numeric value ("Track 2" < "Track 10").
pub fn compare_natural(a: &str, b: &str) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }

    let a = collation_key(a);
    let b = collation_key(b);
    let (mut i, mut j) = (0, 0);

    while i < a.len() && j < b.len() {
        if a[i].is_ascii_digit() && b[j].is_ascii_digit() {
            let end_a = digit_run_end(&a, i);
            let end_b = digit_run_end(&b, j);
            match compare_digit_runs(&a[i..end_a], &b[j..end_b]) {
                Ordering::Equal => {
                    i = end_a;
                    j = end_b;
                }
                other => return other,
            }
        } else {
            match char_class(a[i])
                .cmp(&char_class(b[j]))
                .then(a[i].cmp(&b[j]))
            {
                Ordering::Equal => {
                    i += 1;
                    j += 1;
                }
                other => return other,
            }
        }
    }

    (a.len() - i).cmp(&(b.len() - j))
}

fn collation_key(s: &str) -> Vec<char> {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

fn digit_run_end(chars: &[char], start: usize) -> usize {
    chars[start..]
        .iter()
        .position(|c| !c.is_ascii_digit())
        .map_or(chars.len(), |offset| start + offset)
}

fn compare_digit_runs(a: &[char], b: &[char]) -> Ordering {
    let a = strip_leading_zeros(a);
    let b = strip_leading_zeros(b);
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn strip_leading_zeros(run: &[char]) -> &[char] {
    let first = run.iter().position(|c| *c != '0').unwrap_or(run.len());
    &run[first..]
}

// whitespace and punctuation, then digits, then letters
fn char_class(c: char) -> u8 {
    if c.is_ascii_digit() {
        1
    } else if c.is_alphabetic() {
        2
    } else {
        0
    }
}

/// Formats a track length as `M:SS`.
pub fn format_duration(milliseconds: u64) -> String {
    let total_seconds = milliseconds / 1000;
    format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
}

/// Formats an ISO-8601 release date as e.g. "October 21, 2022".
///
/// Accepts both full timestamps and bare `YYYY-MM-DD` dates. Returns `None`
/// for anything else.
pub fn format_release_date(date: &str) -> Option<String> {
    let day = match DateTime::parse_from_rfc3339(date) {
        Ok(ts) => ts.date_naive(),
        Err(_) => NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?,
    };
    Some(day.format("%B %-d, %Y").to_string())
}

pub fn parse_sort_criterion(s: &str) -> Result<SortCriterion, String> {
    match s.trim().to_ascii_lowercase().as_str() {
        "" => Err("sort criterion cannot be empty".into()),
        "track" | "song" | "name" => Ok(SortCriterion::TrackName),
        "album" | "collection" => Ok(SortCriterion::AlbumName),
        other => Err(format!(
            "invalid value '{}'; expected one of: track, album",
            other
        )),
    }
}

pub fn song_table_rows(songs: &[&Song], playing: Option<PreviewKey>) -> Vec<SongTableRow> {
    songs
        .iter()
        .enumerate()
        .map(|(i, song)| SongTableRow {
            row: i + 1,
            track: song.track_name.clone(),
            artist: song.artist_name.clone(),
            album: song.collection_name.clone(),
            length: song
                .track_time_millis
                .map(format_duration)
                .unwrap_or_else(|| "-".to_string()),
            released: song
                .release_date
                .as_deref()
                .and_then(format_release_date)
                .unwrap_or_else(|| "-".to_string()),
            genre: song.primary_genre_name.clone().unwrap_or_default(),
            preview: match (&song.preview_url, playing) {
                (Some(_), Some(key)) if key == song.key() => "playing".to_string(),
                (Some(_), _) => "yes".to_string(),
                (None, _) => "-".to_string(),
            },
        })
        .collect()
}
