use std::cmp::Ordering;

use tunescout::types::{PreviewKey, Song, SortCriterion, SortDirection};
use tunescout::utils::*;

// Helper function to create a test song
fn create_test_song(id: u64, track: &str, album: &str) -> Song {
    Song {
        track_id: id,
        track_name: track.to_string(),
        artist_name: "Taylor Swift".to_string(),
        collection_name: album.to_string(),
        artwork_url100: format!("test-url-{}", id),
        artwork_url60: format!("test-url-{}-60", id),
        preview_url: Some(format!("preview-{}", id)),
        track_time_millis: Some(200690),
        release_date: Some("2022-10-21T07:00:00Z".to_string()),
        primary_genre_name: Some("Pop".to_string()),
        track_price: None,
        currency: None,
        track_view_url: None,
    }
}

fn mock_songs() -> Vec<Song> {
    vec![
        create_test_song(1, "Anti-Hero", "Midnights"),
        create_test_song(2, "Shake It Off", "1989"),
        create_test_song(3, "Love Story", "Fearless"),
    ]
}

fn track_names(songs: &[&Song]) -> Vec<String> {
    songs.iter().map(|s| s.track_name.clone()).collect()
}

fn ids(songs: &[&Song]) -> Vec<u64> {
    songs.iter().map(|s| s.track_id).collect()
}

#[test]
fn test_filter_songs_blank_query_keeps_everything() {
    let songs = mock_songs();

    for query in ["", "   ", "\t\n"] {
        let result = filter_songs(&songs, query);
        assert_eq!(ids(&result), vec![1, 2, 3]);
    }
}

#[test]
fn test_filter_songs_by_track_name() {
    let songs = mock_songs();
    let result = filter_songs(&songs, "Anti");
    assert_eq!(track_names(&result), vec!["Anti-Hero"]);
}

#[test]
fn test_filter_songs_by_album_name() {
    let songs = mock_songs();
    let result = filter_songs(&songs, "Midnights");
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].collection_name, "Midnights");
}

#[test]
fn test_filter_songs_is_case_insensitive() {
    let songs = mock_songs();
    let lower = filter_songs(&songs, "shake");
    let upper = filter_songs(&songs, "SHAKE");

    assert_eq!(ids(&lower), ids(&upper));
    assert_eq!(track_names(&upper), vec!["Shake It Off"]);
}

#[test]
fn test_filter_songs_partial_and_trimmed_matches() {
    let songs = mock_songs();

    // substring in the middle of a name
    assert_eq!(track_names(&filter_songs(&songs, "ory")), vec!["Love Story"]);
    // surrounding whitespace is ignored
    assert_eq!(track_names(&filter_songs(&songs, "  love ")), vec!["Love Story"]);
}

#[test]
fn test_filter_songs_no_match() {
    let songs = mock_songs();
    assert!(filter_songs(&songs, "NonexistentSong").is_empty());
}

#[test]
fn test_filter_songs_preserves_order() {
    let songs = vec![
        create_test_song(10, "Love You To Death", "Midnights"),
        create_test_song(11, "Shake It Off", "1989"),
        create_test_song(12, "Lover", "Lover"),
        create_test_song(13, "Love Story", "Fearless"),
    ];

    let result = filter_songs(&songs, "love");
    assert_eq!(ids(&result), vec![10, 12, 13]);
}

#[test]
fn test_filter_songs_tolerates_missing_names() {
    let songs: Vec<Song> = serde_json::from_str(
        r#"[{"trackId": 1}, {"trackId": 2, "trackName": "Karma", "collectionName": "Midnights"}]"#,
    )
    .unwrap();

    assert_eq!(ids(&filter_songs(&songs, "karma")), vec![2]);
    assert_eq!(filter_songs(&songs, "").len(), 2);
}

#[test]
fn test_sort_songs_by_track_name_ascending() {
    let songs = mock_songs();
    let refs: Vec<&Song> = songs.iter().collect();

    let result = sort_songs(&refs, SortCriterion::TrackName, SortDirection::Ascending);
    assert_eq!(
        track_names(&result),
        vec!["Anti-Hero", "Love Story", "Shake It Off"]
    );
}

#[test]
fn test_sort_songs_by_album_name_ascending() {
    let songs = mock_songs();
    let refs: Vec<&Song> = songs.iter().collect();

    let result = sort_songs(&refs, SortCriterion::AlbumName, SortDirection::Ascending);
    let albums: Vec<&str> = result.iter().map(|s| s.collection_name.as_str()).collect();
    assert_eq!(albums, vec!["1989", "Fearless", "Midnights"]);
}

#[test]
fn test_sort_songs_does_not_mutate_input() {
    let songs = mock_songs();
    let original = songs.clone();
    let refs: Vec<&Song> = songs.iter().collect();

    let _ = sort_songs(&refs, SortCriterion::TrackName, SortDirection::Descending);

    assert_eq!(ids(&refs), vec![1, 2, 3]);
    assert_eq!(songs, original);
}

#[test]
fn test_sort_songs_is_stable() {
    let songs = vec![
        create_test_song(1, "Style", "1989"),
        create_test_song(2, "Karma", "Midnights"),
        create_test_song(3, "Blank Space", "1989"),
        create_test_song(4, "Lavender Haze", "Midnights"),
        create_test_song(5, "Welcome To New York", "1989"),
    ];
    let refs: Vec<&Song> = songs.iter().collect();

    let asc = sort_songs(&refs, SortCriterion::AlbumName, SortDirection::Ascending);
    assert_eq!(ids(&asc), vec![1, 3, 5, 2, 4]);

    let desc = sort_songs(&refs, SortCriterion::AlbumName, SortDirection::Descending);
    assert_eq!(ids(&desc), vec![2, 4, 1, 3, 5]);
}

#[test]
fn test_sort_songs_case_only_differences_keep_input_order() {
    let songs = vec![
        create_test_song(1, "willow", "evermore"),
        create_test_song(2, "Willow", "evermore"),
    ];
    let refs: Vec<&Song> = songs.iter().collect();

    let result = sort_songs(&refs, SortCriterion::TrackName, SortDirection::Ascending);
    assert_eq!(ids(&result), vec![1, 2]);
}

#[test]
fn test_sort_songs_descending_is_reverse_for_distinct_keys() {
    let songs = vec![
        create_test_song(1, "Cardigan", "folklore"),
        create_test_song(2, "august", "folklore"),
        create_test_song(3, "Exile", "folklore"),
        create_test_song(4, "betty", "folklore"),
        create_test_song(5, "the 1", "folklore"),
    ];
    let refs: Vec<&Song> = songs.iter().collect();

    let mut asc = sort_songs(&refs, SortCriterion::TrackName, SortDirection::Ascending);
    let desc = sort_songs(&refs, SortCriterion::TrackName, SortDirection::Descending);

    asc.reverse();
    assert_eq!(ids(&asc), ids(&desc));
}

#[test]
fn test_sort_songs_numeric_aware() {
    let songs = vec![
        create_test_song(1, "Track 10", "A"),
        create_test_song(2, "Track 2", "A"),
        create_test_song(3, "Track 1", "A"),
    ];
    let refs: Vec<&Song> = songs.iter().collect();

    let result = sort_songs(&refs, SortCriterion::TrackName, SortDirection::Ascending);
    assert_eq!(track_names(&result), vec!["Track 1", "Track 2", "Track 10"]);
}

#[test]
fn test_sort_songs_empty_and_single() {
    let empty: Vec<&Song> = Vec::new();
    assert!(sort_songs(&empty, SortCriterion::TrackName, SortDirection::Ascending).is_empty());

    let songs = vec![create_test_song(7, "Mine", "Speak Now")];
    let refs: Vec<&Song> = songs.iter().collect();
    let result = sort_songs(&refs, SortCriterion::AlbumName, SortDirection::Descending);
    assert_eq!(ids(&result), vec![7]);
}

#[test]
fn test_compare_natural() {
    assert_eq!(compare_natural("Track 2", "Track 10"), Ordering::Less);
    assert_eq!(compare_natural("track 2", "TRACK 2"), Ordering::Equal);
    assert_eq!(compare_natural("Café", "cafe"), Ordering::Equal);
    assert_eq!(compare_natural("Émilie", "Eric"), Ordering::Less);
    assert_eq!(compare_natural("Track 02", "Track 2"), Ordering::Equal);
    assert_eq!(compare_natural("", "A"), Ordering::Less);
    assert_eq!(compare_natural("Love", "Love Story"), Ordering::Less);
    assert_eq!(compare_natural("1989", "Fearless"), Ordering::Less);
    assert_eq!(compare_natural("Anti-Hero", "Antidote"), Ordering::Less);
}

#[test]
fn test_format_duration() {
    assert_eq!(format_duration(200690), "3:20");
    assert_eq!(format_duration(60000), "1:00");
    assert_eq!(format_duration(30000), "0:30");
    assert_eq!(format_duration(0), "0:00");
    assert_eq!(format_duration(65000), "1:05");
    assert_eq!(format_duration(3_600_000), "60:00");
}

#[test]
fn test_format_release_date() {
    assert_eq!(
        format_release_date("2022-10-21T07:00:00Z").as_deref(),
        Some("October 21, 2022")
    );
    assert_eq!(
        format_release_date("2014-08-18T07:00:00Z").as_deref(),
        Some("August 18, 2014")
    );
    assert_eq!(
        format_release_date("2008-09-11").as_deref(),
        Some("September 11, 2008")
    );
    assert_eq!(format_release_date("not a date"), None);
}

#[test]
fn test_parse_sort_criterion() {
    assert_eq!(parse_sort_criterion("track"), Ok(SortCriterion::TrackName));
    assert_eq!(parse_sort_criterion("Album"), Ok(SortCriterion::AlbumName));
    assert_eq!(parse_sort_criterion(" song "), Ok(SortCriterion::TrackName));

    let result = parse_sort_criterion("");
    assert!(result.unwrap_err().contains("cannot be empty"));

    let result = parse_sort_criterion("artist");
    assert!(result.unwrap_err().contains("invalid value 'artist'"));
}

#[test]
fn test_song_table_rows() {
    let mut songs = mock_songs();
    songs[2].preview_url = None;
    songs[2].track_time_millis = None;
    let refs: Vec<&Song> = songs.iter().collect();

    let rows = song_table_rows(&refs, Some(PreviewKey(2)));

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].row, 1);
    assert_eq!(rows[0].length, "3:20");
    assert_eq!(rows[0].released, "October 21, 2022");
    assert_eq!(rows[0].preview, "yes");
    assert_eq!(rows[1].preview, "playing");
    assert_eq!(rows[2].preview, "-");
    assert_eq!(rows[2].length, "-");
}

#[test]
fn test_song_price_requires_currency() {
    let mut song = create_test_song(1, "Karma", "Midnights");
    assert_eq!(song.price(), None);

    song.track_price = Some(1.29);
    assert_eq!(song.price(), None);

    song.currency = Some("USD".to_string());
    assert_eq!(song.price().as_deref(), Some("1.29 USD"));
}
