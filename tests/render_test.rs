mod common;

use chrono::{TimeZone, Utc};
use common::*;
use nowplaying::{
    error::NowPlayingError,
    render::{html, json, svg},
    types::{Device, PlaybackSnapshot, RepeatState, Track, TrackObject},
};
use serde_json::{Value, json};

// Helper function to create a normalized track
fn create_test_track(name: &str, artist: &str) -> Track {
    let object: TrackObject = serde_json::from_value(track_json(name, artist)).unwrap();
    Track::from(object)
}

fn create_test_snapshot(name: &str, is_playing: bool, progress_ms: u64) -> PlaybackSnapshot {
    PlaybackSnapshot {
        track: Some(create_test_track(name, "Artist A")),
        is_playing,
        progress_ms,
        ..PlaybackSnapshot::default()
    }
}

#[test]
fn test_compact_recently_played_scenario() {
    let snapshot = create_test_snapshot("Song A", false, 0);
    let body = json::compact(&snapshot);

    assert_eq!(body["name"], "Song A");
    assert_eq!(body["artist"], "Artist A");
    assert_eq!(body["isPlaying"], false);
    assert_eq!(body["album"], "Album A");
    assert_eq!(body["albumType"], "album");
    assert_eq!(body["releaseDate"], "2021-04-09");
    assert_eq!(body["duration"], 200000);
    assert_eq!(body["popularity"], 55);
    assert_eq!(body["trackNumber"], 3);
    assert_eq!(body["discNumber"], 1);
    assert_eq!(body["albumImage"], "https://i.scdn.co/image/large");
    assert_eq!(body["trackUrl"], "https://open.spotify.com/track/Song A");
    assert_eq!(body["albumUrl"], "https://open.spotify.com/album/album_id");
    assert_eq!(body["artistUrl"], "https://open.spotify.com/artist/Artist A");
    assert_eq!(body["previewUrl"], Value::Null);
    // Playback state is not part of the compact shape
    assert!(body.get("shuffleState").is_none());
    assert!(body.get("repeatState").is_none());
    assert!(body.get("error").is_none());
}

#[test]
fn test_compact_joins_artists() {
    let mut snapshot = create_test_snapshot("Song A", true, 0);
    if let Some(track) = snapshot.track.as_mut() {
        let mut second = track.artists[0].clone();
        second.name = "Artist B".to_string();
        track.artists.push(second);
    }

    assert_eq!(json::compact(&snapshot)["artist"], "Artist A, Artist B");
}

#[test]
fn test_compact_empty_and_error_bodies() {
    assert_eq!(
        json::compact(&PlaybackSnapshot::default()),
        json!({ "error": "No track found", "trackUrl": null, "albumUrl": null, "artistUrl": null })
    );
    assert_eq!(
        json::compact_error(),
        json!({ "error": "Spotify API Error", "trackUrl": null, "albumUrl": null, "artistUrl": null })
    );
    assert_eq!(
        json::missing_credentials(),
        json!({ "error": "Missing Spotify credentials" })
    );
}

#[test]
fn test_extended_shape_while_playing() {
    let mut snapshot = create_test_snapshot("Song B", true, 61_000);
    snapshot.shuffle_state = true;
    snapshot.repeat_state = RepeatState::Track;
    snapshot.device = Some(Device {
        name: "Laptop".to_string(),
        device_type: "Computer".to_string(),
        volume_percent: Some(70),
        is_active: true,
    });
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap();

    let body = json::extended(&snapshot, now);

    assert_eq!(body["name"], "Song B");
    assert_eq!(
        body["artist"],
        json!([{ "name": "Artist A", "id": "Artist A_id", "url": "https://open.spotify.com/artist/Artist A" }])
    );
    assert_eq!(body["album"]["type"], "album");
    assert_eq!(body["album"]["totalTracks"], 12);
    assert_eq!(body["album"]["images"][1]["url"], "https://i.scdn.co/image/small");
    assert_eq!(body["album"]["images"][0]["height"], 640);
    assert_eq!(body["explicit"], false);
    assert_eq!(body["isLocal"], false);
    assert_eq!(body["urls"]["album"], "https://open.spotify.com/album/album_id");
    assert_eq!(
        body["playback"],
        json!({
            "isPlaying": true,
            "progressMs": 61000,
            "shuffleState": true,
            "repeatState": "track",
            "device": { "name": "Laptop", "type": "Computer", "volumePercent": 70, "isActive": true }
        })
    );
    assert_eq!(body["timestamps"]["current"], "2024-06-01T08:00:00.000Z");
    assert_eq!(body["timestamps"]["playedAt"], Value::Null);
}

#[test]
fn test_extended_played_at_when_not_playing() {
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap();

    let snapshot = create_test_snapshot("Song A", false, 0);
    let body = json::extended(&snapshot, now);
    assert_eq!(body["timestamps"]["playedAt"], "2024-06-01T08:00:00.000Z");
    assert_eq!(body["playback"]["device"], Value::Null);
    assert_eq!(body["playback"]["repeatState"], "off");

    let mut from_history = create_test_snapshot("Song A", false, 0);
    from_history.played_at = Some(Utc.with_ymd_and_hms(2024, 5, 31, 22, 15, 0).unwrap());
    let body = json::extended(&from_history, now);
    assert_eq!(body["timestamps"]["playedAt"], "2024-05-31T22:15:00.000Z");
}

#[test]
fn test_extended_empty_and_error_bodies() {
    let mut empty = PlaybackSnapshot::default();
    assert_eq!(
        json::extended(&empty, Utc::now()),
        json!({ "error": "No track found", "isPlaying": false, "hasActiveDevice": false })
    );

    empty.device = Some(Device {
        name: "Phone".to_string(),
        device_type: "Smartphone".to_string(),
        volume_percent: None,
        is_active: true,
    });
    assert_eq!(json::extended(&empty, Utc::now())["hasActiveDevice"], true);

    let body = json::extended_error(&NowPlayingError::Auth("invalid_grant".to_string()));
    assert_eq!(body["error"], "Spotify API Error");
    assert_eq!(body["message"], "Authentication failed: invalid_grant");
}

#[test]
fn test_badge_variants_for_outcomes() {
    let config = svg::badge(&Err(NowPlayingError::Config));
    assert!(config.contains("Configuration Error"));
    assert!(config.contains("Missing Spotify credentials"));
    assert!(config.contains("⚙"));

    let auth = svg::badge(&Err(NowPlayingError::Auth("boom".to_string())));
    assert!(auth.contains("Connection Error"));
    assert!(auth.contains("#dc2626"));
    assert!(!auth.contains("boom"));

    let empty = svg::badge(&Ok(PlaybackSnapshot::default()));
    assert!(empty.contains("No music playing"));
    assert_eq!(empty.matches("<animate ").count(), 3);

    let found = svg::badge(&Ok(create_test_snapshot("Song A", true, 0)));
    assert!(found.contains("Song A"));
    assert!(found.contains("by Artist A"));

    for badge in [config, auth, empty, found] {
        assert!(badge.starts_with(r#"<svg width="500" height="130""#));
        assert!(badge.trim_end().ends_with("</svg>"));
    }
}

#[test]
fn test_badge_playing_has_equalizer_and_progress() {
    let snapshot = create_test_snapshot("Song A", true, 100_000);
    let badge = svg::badge(&Ok(snapshot));

    assert!(badge.contains("Now Playing"));
    assert!(badge.contains(r#"translate(450, 25)"#));
    assert_eq!(badge.matches(r##"fill="#1db954""##).count(), 5);
    assert!(badge.contains(r#"width="150.0""#));
    assert!(badge.contains("1:40 / 3:20"));
}

#[test]
fn test_badge_paused_has_static_bars_and_no_progress() {
    let snapshot = create_test_snapshot("Song A", false, 100_000);
    let badge = svg::badge(&Ok(snapshot));

    assert!(badge.contains("Recently Played"));
    assert!(badge.contains(r#"translate(460, 30)"#));
    assert!(!badge.contains(r#"translate(450, 25)"#));
    assert_eq!(badge.matches(r##"fill="#666""##).count(), 2);
    assert!(!badge.contains(" / 3:20"));
}

#[test]
fn test_badge_progress_is_clamped() {
    let badge = svg::badge(&Ok(create_test_snapshot("Song A", true, 900_000)));
    assert!(badge.contains(r#"width="300.0""#));
}

#[test]
fn test_badge_marquee_only_for_long_titles() {
    let short = "x".repeat(25);
    let badge = svg::badge(&Ok(create_test_snapshot(&short, true, 0)));
    assert!(!badge.contains("animateTransform"));

    let long = "y".repeat(30);
    let badge = svg::badge(&Ok(create_test_snapshot(&long, true, 0)));
    assert!(badge.contains("animateTransform"));
    assert!(badge.contains("values=\"0,0; -60,0; -60,0; 0,0\""));
}

#[test]
fn test_badge_truncates_artist_line() {
    let mut snapshot = create_test_snapshot("Song A", true, 0);
    if let Some(track) = snapshot.track.as_mut() {
        track.artists[0].name = "A".repeat(40);
    }

    let badge = svg::badge(&Ok(snapshot));
    assert!(badge.contains(&format!("by {}...", "A".repeat(35))));
    assert!(!badge.contains(&"A".repeat(36)));
}

#[test]
fn test_badge_placeholder_without_album_art() {
    let mut snapshot = create_test_snapshot("Song A", false, 0);
    if let Some(track) = snapshot.track.as_mut() {
        track.album.images.clear();
    }

    let badge = svg::badge(&Ok(snapshot));
    assert!(!badge.contains("<image"));
    assert!(badge.contains("♪"));
}

#[test]
fn test_badge_escapes_track_text() {
    let snapshot = create_test_snapshot("Rock & Roll <Live>", true, 0);
    let badge = svg::badge(&Ok(snapshot));

    assert!(badge.contains("Rock &amp; Roll &lt;Live&gt;"));
    assert!(!badge.contains("<Live>"));
}

#[test]
fn test_html_pages() {
    let authorize = html::authorize_page("https://accounts.spotify.com/authorize?a=1&b=2");
    assert!(authorize.contains(r#"href="https://accounts.spotify.com/authorize?a=1&amp;b=2""#));
    assert!(authorize.contains("Authorize Spotify Access"));

    let code = html::code_page(
        "AQB<code>",
        "client",
        "http://127.0.0.1:3000/api/login",
        "https://accounts.spotify.com/api/token",
    );
    assert!(code.contains("AQB&lt;code&gt;"));
    assert!(code.contains("client:&lt;client_secret&gt;"));
    assert!(code.contains("-d grant_type=authorization_code"));
    assert!(code.contains("-d redirect_uri=http://127.0.0.1:3000/api/login"));
    assert!(!code.contains("<code>"));

    let error = html::error_page("access_denied");
    assert!(error.contains("Authorization Error"));
    assert!(error.contains("Error: access_denied"));
}
