use chrono::NaiveDate;
use freshlist::types::{Album, AlbumArtist, CreatePlaylistResponse, Page, PlaylistHandle};
use freshlist::utils::*;
use std::collections::BTreeSet;

#[test]
fn test_generate_code_verifier() {
    let verifier = generate_code_verifier();

    // Should be exactly 128 characters
    assert_eq!(verifier.len(), 128);

    // Should contain only alphanumeric characters
    assert!(verifier.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated verifiers should be different
    let verifier2 = generate_code_verifier();
    assert_ne!(verifier, verifier2);
}

#[test]
fn test_generate_code_challenge() {
    let verifier = "test_verifier_123";
    let challenge = generate_code_challenge(verifier);

    assert!(!challenge.is_empty());

    // Deterministic for the same input, different for other inputs
    assert_eq!(challenge, generate_code_challenge(verifier));
    assert_ne!(challenge, generate_code_challenge("different_verifier"));

    // URL-safe base64 without padding
    assert!(
        challenge
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    );
}

#[test]
fn test_release_kind_display() {
    assert_eq!(ReleaseKind::Album.to_string(), "album");
    assert_eq!(ReleaseKind::Single.to_string(), "single");
    assert_eq!(ReleaseKind::AppearsOn.to_string(), "appears_on");
    assert_eq!(ReleaseKind::Compilation.to_string(), "compilation");
}

#[test]
fn test_release_kinds_default() {
    let default_kinds = ReleaseKinds::default();
    let collected: Vec<ReleaseKind> = default_kinds.iter().collect();
    assert_eq!(collected, vec![ReleaseKind::Album, ReleaseKind::Single]);
    assert_eq!(default_kinds.to_string(), "album,single");
}

#[test]
fn test_release_kinds_display() {
    let empty_kinds = ReleaseKinds(BTreeSet::new());
    assert_eq!(empty_kinds.to_string(), "");

    // Sorted by variant order regardless of insertion order
    let mut set = BTreeSet::new();
    set.insert(ReleaseKind::Compilation);
    set.insert(ReleaseKind::Single);
    set.insert(ReleaseKind::Album);
    assert_eq!(ReleaseKinds(set).to_string(), "album,single,compilation");
}

#[test]
fn test_parse_release_kinds_valid_inputs() {
    let result = parse_release_kinds("album").unwrap();
    let kinds: Vec<ReleaseKind> = result.iter().collect();
    assert_eq!(kinds, vec![ReleaseKind::Album]);

    let result = parse_release_kinds("all").unwrap();
    assert_eq!(result.iter().count(), ReleaseKind::ALL.len());

    // Spaces, hyphens and case are tolerated
    let result = parse_release_kinds("ALBUM, appears-on").unwrap();
    let kinds: Vec<ReleaseKind> = result.iter().collect();
    assert_eq!(kinds, vec![ReleaseKind::Album, ReleaseKind::AppearsOn]);

    // Duplicates collapse
    let result = parse_release_kinds("single,album,single").unwrap();
    assert_eq!(result.to_string(), "album,single");
}

#[test]
fn test_parse_release_kinds_invalid_inputs() {
    let result = parse_release_kinds("   ");
    assert!(result.unwrap_err().contains("cannot be empty"));

    let result = parse_release_kinds("album,,single");
    assert!(result.unwrap_err().contains("empty segment"));

    let result = parse_release_kinds("album,bootleg");
    assert!(result.unwrap_err().contains("invalid value 'bootleg'"));
}

#[test]
fn test_parse_date() {
    assert_eq!(
        parse_date("2024-06-15"),
        Ok(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
    );
    assert!(parse_date("2024-13-40").is_err());
    assert!(parse_date("06/15/2024").is_err());
}

#[test]
fn test_playlist_name_embeds_date() {
    let date = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
    assert_eq!(
        playlist_name("New Releases", date),
        "New Releases - 03-07-2026"
    );
}

#[test]
fn test_balanced_batches_documented_sizes() {
    for (total, expected) in [
        (250usize, vec![84usize, 83, 83]),
        (150, vec![75, 75]),
        (80, vec![80]),
    ] {
        let items: Vec<usize> = (0..total).collect();
        let batches = balanced_batches(&items, MAX_PLAYLIST_BATCH);
        let sizes: Vec<usize> = batches.iter().map(|b| b.len()).collect();
        assert_eq!(sizes, expected, "sizes for {} tracks", total);
        assert_eq!(batches.concat(), items);
    }
}

#[test]
fn test_album_primary_artist() {
    let album = Album {
        id: "id".to_string(),
        name: "Name".to_string(),
        release_date: "2024-06-01".to_string(),
        release_date_precision: "day".to_string(),
        album_type: "single".to_string(),
        artists: vec![
            AlbumArtist {
                id: "1".to_string(),
                name: "Lead".to_string(),
            },
            AlbumArtist {
                id: "2".to_string(),
                name: "Feature".to_string(),
            },
        ],
    };
    assert_eq!(album.primary_artist(), "Lead");

    let no_artist = Album {
        artists: Vec::new(),
        ..album
    };
    assert_eq!(no_artist.primary_artist(), "");
}

#[test]
fn test_spotify_payloads_deserialize() {
    let page: Page<Album> = serde_json::from_str(
        r#"{
            "items": [{
                "id": "4aawyAB9vmqN3uQ7FjRGTy",
                "name": "Global Warming",
                "release_date": "2012-11-16",
                "release_date_precision": "day",
                "album_type": "album",
                "total_tracks": 18,
                "artists": [{"id": "0TnOYISbd1XYRBk9myaseg", "name": "Pitbull", "type": "artist"}]
            }],
            "next": "https://api.spotify.com/v1/artists/0TnOYISbd1XYRBk9myaseg/albums?offset=50&limit=50",
            "total": 51
        }"#,
    )
    .unwrap();
    assert_eq!(page.items[0].primary_artist(), "Pitbull");
    assert!(page.next.is_some());
    assert_eq!(page.total, Some(51));

    let last: Page<Album> = serde_json::from_str(r#"{"items": [], "next": null}"#).unwrap();
    assert!(last.next.is_none());
    assert!(last.total.is_none());

    let created: CreatePlaylistResponse = serde_json::from_str(
        r#"{
            "id": "3cEYpjA9oz9GiPac4AsH4n",
            "name": "New Releases - 06-15-2024",
            "description": null,
            "external_urls": {"spotify": "https://open.spotify.com/playlist/3cEYpjA9oz9GiPac4AsH4n"}
        }"#,
    )
    .unwrap();
    let handle = PlaylistHandle::from(created);
    assert_eq!(handle.id, "3cEYpjA9oz9GiPac4AsH4n");
    assert_eq!(
        handle.url,
        "https://open.spotify.com/playlist/3cEYpjA9oz9GiPac4AsH4n"
    );
}
