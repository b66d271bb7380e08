use std::fmt;

use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// A single track as returned by the iTunes Search API.
///
/// Text fields the API leaves out deserialize to the empty string, so the
/// filter and sort code never has to special-case a missing name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    #[serde(default)]
    pub track_id: u64,
    #[serde(default)]
    pub track_name: String,
    #[serde(default)]
    pub artist_name: String,
    #[serde(default)]
    pub collection_name: String,
    #[serde(default)]
    pub artwork_url100: String,
    #[serde(default)]
    pub artwork_url60: String,
    pub preview_url: Option<String>,
    pub track_time_millis: Option<u64>,
    pub release_date: Option<String>,
    pub primary_genre_name: Option<String>,
    pub track_price: Option<f64>,
    pub currency: Option<String>,
    pub track_view_url: Option<String>,
}

impl Song {
    pub fn key(&self) -> PreviewKey {
        PreviewKey(self.track_id)
    }

    /// Price and currency, only when the API supplied both.
    pub fn price(&self) -> Option<String> {
        match (self.track_price, &self.currency) {
            (Some(price), Some(currency)) => Some(format!("{:.2} {}", price, currency)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    #[serde(default)]
    pub result_count: u64,
    pub results: Vec<Song>,
}

/// Wrapper returned by relays that embed the upstream body as a string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayEnvelope {
    pub contents: String,
}

/// Opaque identity of a playable preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PreviewKey(pub u64);

impl fmt::Display for PreviewKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortCriterion {
    #[default]
    TrackName,
    AlbumName,
}

impl SortCriterion {
    pub fn field<'a>(&self, song: &'a Song) -> &'a str {
        match self {
            SortCriterion::TrackName => &song.track_name,
            SortCriterion::AlbumName => &song.collection_name,
        }
    }
}

impl fmt::Display for SortCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SortCriterion::TrackName => "track",
            SortCriterion::AlbumName => "album",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SortDirection::Ascending => "ascending",
            SortDirection::Descending => "descending",
        };
        write!(f, "{}", s)
    }
}

#[derive(Tabled)]
pub struct SongTableRow {
    #[tabled(rename = "#")]
    pub row: usize,
    pub track: String,
    pub artist: String,
    pub album: String,
    pub length: String,
    pub released: String,
    pub genre: String,
    pub preview: String,
}
