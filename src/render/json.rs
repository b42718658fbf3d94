use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Value, json};

use crate::{
    error::NowPlayingError,
    types::{PlaybackSnapshot, Track},
};

pub const NO_TRACK_FOUND: &str = "No track found";
pub const API_ERROR: &str = "Spotify API Error";

/// Flat summary of the current or last played track.
///
/// Shuffle, repeat and device data are not part of this shape.
pub fn compact(snapshot: &PlaybackSnapshot) -> Value {
    let Some(track) = &snapshot.track else {
        return json!({
            "error": NO_TRACK_FOUND,
            "trackUrl": null,
            "albumUrl": null,
            "artistUrl": null,
        });
    };

    json!({
        "name": track.name,
        "artist": track.artist_names(),
        "album": track.album.name,
        "albumType": track.album.album_type,
        "releaseDate": track.album.release_date,
        "duration": track.duration_ms,
        "popularity": track.popularity,
        "trackNumber": track.track_number,
        "discNumber": track.disc_number,
        "totalTracks": track.album.total_tracks,
        "isPlaying": snapshot.is_playing,
        "trackUrl": track.urls.track,
        "albumUrl": track.urls.album,
        "artistUrl": track.urls.artist,
        "albumImage": track.album_image(),
        "previewUrl": track.preview_url,
    })
}

pub fn compact_error() -> Value {
    json!({
        "error": API_ERROR,
        "trackUrl": null,
        "albumUrl": null,
        "artistUrl": null,
    })
}

/// Nested view of the full track and playback state.
///
/// `now` fills `timestamps.current`. For a track that is not playing,
/// `timestamps.playedAt` is the history timestamp when known and `now`
/// otherwise.
pub fn extended(snapshot: &PlaybackSnapshot, now: DateTime<Utc>) -> Value {
    let Some(track) = &snapshot.track else {
        return json!({
            "error": NO_TRACK_FOUND,
            "isPlaying": false,
            "hasActiveDevice": snapshot.has_active_device(),
        });
    };

    let played_at = if snapshot.is_playing {
        None
    } else {
        Some(iso8601(snapshot.played_at.unwrap_or(now)))
    };

    json!({
        "name": track.name,
        "artist": artists(track),
        "album": {
            "name": track.album.name,
            "id": track.album.id,
            "type": track.album.album_type,
            "releaseDate": track.album.release_date,
            "totalTracks": track.album.total_tracks,
            "url": track.album.url,
            "images": track.album.images,
        },
        "duration": track.duration_ms,
        "popularity": track.popularity,
        "trackNumber": track.track_number,
        "discNumber": track.disc_number,
        "explicit": track.explicit,
        "isLocal": track.is_local,
        "previewUrl": track.preview_url,
        "urls": {
            "track": track.urls.track,
            "album": track.urls.album,
            "artist": track.urls.artist,
        },
        "playback": {
            "isPlaying": snapshot.is_playing,
            "progressMs": snapshot.progress_ms,
            "shuffleState": snapshot.shuffle_state,
            "repeatState": snapshot.repeat_state.as_str(),
            "device": snapshot.device.as_ref().map(|d| json!({
                "name": d.name,
                "type": d.device_type,
                "volumePercent": d.volume_percent,
                "isActive": d.is_active,
            })),
        },
        "timestamps": {
            "current": iso8601(now),
            "playedAt": played_at,
        },
    })
}

pub fn extended_error(err: &NowPlayingError) -> Value {
    json!({
        "error": API_ERROR,
        "message": err.to_string(),
    })
}

/// Body for both JSON endpoints when credentials are not configured.
pub fn missing_credentials() -> Value {
    json!({ "error": NowPlayingError::Config.to_string() })
}

fn artists(track: &Track) -> Value {
    track
        .artists
        .iter()
        .map(|a| json!({ "name": a.name, "id": a.id, "url": a.url }))
        .collect()
}

fn iso8601(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
