#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use nowplaying::{
    config::Credentials,
    error::{NowPlayingError, UpstreamError},
    spotify::SpotifyApi,
    types::{CurrentlyPlayingResponse, PlaybackStateResponse, RecentlyPlayedResponse},
};
use reqwest::StatusCode;
use serde_json::{Value, json};

pub fn test_credentials() -> Credentials {
    Credentials::new("client", "secret", "refresh")
}

// Helper function to create a track payload as the player endpoints return it
pub fn track_json(name: &str, artist: &str) -> Value {
    json!({
        "id": format!("{}_id", name),
        "name": name,
        "artists": [{
            "id": format!("{}_id", artist),
            "name": artist,
            "external_urls": { "spotify": format!("https://open.spotify.com/artist/{}", artist) }
        }],
        "album": {
            "id": "album_id",
            "name": "Album A",
            "album_type": "album",
            "release_date": "2021-04-09",
            "total_tracks": 12,
            "external_urls": { "spotify": "https://open.spotify.com/album/album_id" },
            "images": [
                { "url": "https://i.scdn.co/image/large", "height": 640, "width": 640 },
                { "url": "https://i.scdn.co/image/small", "height": 64, "width": 64 }
            ]
        },
        "duration_ms": 200000,
        "popularity": 55,
        "track_number": 3,
        "disc_number": 1,
        "explicit": false,
        "is_local": false,
        "preview_url": null,
        "external_urls": { "spotify": format!("https://open.spotify.com/track/{}", name) }
    })
}

pub fn playing_json(track: Value, is_playing: bool, progress_ms: u64) -> Value {
    json!({ "item": track, "is_playing": is_playing, "progress_ms": progress_ms })
}

pub fn recent_json(track: Value) -> Value {
    json!({ "items": [{ "track": track, "played_at": "2024-05-01T12:30:00.000Z" }] })
}

pub fn playback_json(shuffle: bool, repeat: &str, active: bool) -> Value {
    json!({
        "device": {
            "id": "device_id",
            "name": "Kitchen",
            "type": "Speaker",
            "volume_percent": 40,
            "is_active": active
        },
        "shuffle_state": shuffle,
        "repeat_state": repeat,
        "is_playing": true
    })
}

/// Scripted stand-in for the Spotify Web API that records which calls were made.
pub struct FakeSpotify {
    token: Result<String, String>,
    current: Result<Option<Value>, u16>,
    recent: Result<Value, u16>,
    playback: Result<Option<Value>, u16>,
    calls: Mutex<Vec<&'static str>>,
}

impl FakeSpotify {
    /// Token exchange succeeds, nothing is playing and the history is empty.
    pub fn new() -> Self {
        FakeSpotify {
            token: Ok("access".to_string()),
            current: Ok(None),
            recent: Ok(json!({ "items": [] })),
            playback: Ok(None),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn token_failure(mut self) -> Self {
        self.token = Err("invalid_grant".to_string());
        self
    }

    pub fn playing(mut self, body: Value) -> Self {
        self.current = Ok(Some(body));
        self
    }

    pub fn current_status(mut self, status: u16) -> Self {
        self.current = Err(status);
        self
    }

    pub fn recent(mut self, body: Value) -> Self {
        self.recent = Ok(body);
        self
    }

    pub fn recent_status(mut self, status: u16) -> Self {
        self.recent = Err(status);
        self
    }

    pub fn playback(mut self, body: Value) -> Self {
        self.playback = Ok(Some(body));
        self
    }

    pub fn playback_status(mut self, status: u16) -> Self {
        self.playback = Err(status);
        self
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: &'static str) {
        self.calls.lock().unwrap().push(call);
    }
}

fn status_error(status: u16) -> UpstreamError {
    UpstreamError::Status(StatusCode::from_u16(status).unwrap())
}

#[async_trait]
impl SpotifyApi for FakeSpotify {
    async fn refresh_access_token(
        &self,
        _credentials: &Credentials,
    ) -> Result<String, NowPlayingError> {
        self.record("token");
        self.token.clone().map_err(NowPlayingError::Auth)
    }

    async fn currently_playing(
        &self,
        access_token: &str,
    ) -> Result<Option<CurrentlyPlayingResponse>, UpstreamError> {
        assert_eq!(access_token, "access");
        self.record("currently_playing");
        match &self.current {
            Ok(Some(body)) => Ok(Some(serde_json::from_value(body.clone()).unwrap())),
            Ok(None) => Ok(None),
            Err(status) => Err(status_error(*status)),
        }
    }

    async fn recently_played(
        &self,
        access_token: &str,
    ) -> Result<RecentlyPlayedResponse, UpstreamError> {
        assert_eq!(access_token, "access");
        self.record("recently_played");
        match &self.recent {
            Ok(body) => Ok(serde_json::from_value(body.clone()).unwrap()),
            Err(status) => Err(status_error(*status)),
        }
    }

    async fn playback_state(
        &self,
        access_token: &str,
    ) -> Result<Option<PlaybackStateResponse>, UpstreamError> {
        assert_eq!(access_token, "access");
        self.record("playback_state");
        match &self.playback {
            Ok(Some(body)) => Ok(Some(serde_json::from_value(body.clone()).unwrap())),
            Ok(None) => Ok(None),
            Err(status) => Err(status_error(*status)),
        }
    }
}
