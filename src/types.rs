use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tabled::Tabled;

// Upstream payloads. Every field is optional because the player endpoints
// omit or null out most of them for local files, ads and podcasts.

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TokenResponse {
    pub access_token: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExternalUrls {
    pub spotify: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageObject {
    pub url: String,
    pub height: Option<u32>,
    pub width: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ArtistObject {
    pub id: Option<String>,
    pub name: String,
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AlbumObject {
    pub id: Option<String>,
    pub name: String,
    pub album_type: Option<String>,
    pub release_date: Option<String>,
    pub total_tracks: Option<u32>,
    pub external_urls: ExternalUrls,
    pub images: Vec<ImageObject>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TrackObject {
    pub name: String,
    pub artists: Vec<ArtistObject>,
    pub album: Option<AlbumObject>,
    pub duration_ms: u64,
    pub popularity: Option<u32>,
    pub track_number: Option<u32>,
    pub disc_number: Option<u32>,
    pub explicit: bool,
    pub is_local: bool,
    pub preview_url: Option<String>,
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CurrentlyPlayingResponse {
    pub item: Option<TrackObject>,
    pub is_playing: bool,
    pub progress_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PlayHistoryObject {
    pub track: Option<TrackObject>,
    pub played_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RecentlyPlayedResponse {
    pub items: Vec<PlayHistoryObject>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DeviceObject {
    pub name: String,
    #[serde(rename = "type")]
    pub device_type: String,
    pub volume_percent: Option<u32>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PlaybackStateResponse {
    pub device: Option<DeviceObject>,
    pub shuffle_state: Option<bool>,
    pub repeat_state: Option<String>,
}

// Normalized records handed from the resolver to the presenters.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatState {
    #[default]
    Off,
    Track,
    Context,
}

impl RepeatState {
    /// Unknown values map to `Off`.
    pub fn parse(value: &str) -> Self {
        match value {
            "track" => RepeatState::Track,
            "context" => RepeatState::Context,
            _ => RepeatState::Off,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RepeatState::Off => "off",
            RepeatState::Track => "track",
            RepeatState::Context => "context",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Device {
    pub name: String,
    pub device_type: String,
    pub volume_percent: Option<u32>,
    pub is_active: bool,
}

impl From<DeviceObject> for Device {
    fn from(device: DeviceObject) -> Self {
        Device {
            name: device.name,
            device_type: device.device_type,
            volume_percent: device.volume_percent,
            is_active: device.is_active,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artist {
    pub name: String,
    pub id: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Image {
    pub url: String,
    pub height: Option<u32>,
    pub width: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Album {
    pub name: Option<String>,
    pub id: Option<String>,
    pub album_type: Option<String>,
    pub release_date: Option<String>,
    pub total_tracks: Option<u32>,
    pub url: Option<String>,
    pub images: Vec<Image>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackUrls {
    pub track: Option<String>,
    pub album: Option<String>,
    pub artist: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub name: String,
    pub artists: Vec<Artist>,
    pub album: Album,
    pub duration_ms: u64,
    pub popularity: Option<u32>,
    pub track_number: Option<u32>,
    pub disc_number: Option<u32>,
    pub explicit: bool,
    pub is_local: bool,
    pub preview_url: Option<String>,
    pub urls: TrackUrls,
}

impl Track {
    /// Artist names joined with `", "`.
    pub fn artist_names(&self) -> String {
        self.artists
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn album_image(&self) -> Option<&str> {
        self.album.images.first().map(|i| i.url.as_str())
    }
}

impl From<TrackObject> for Track {
    fn from(track: TrackObject) -> Self {
        let artist_url = track
            .artists
            .first()
            .and_then(|a| a.external_urls.spotify.clone());

        let album = track
            .album
            .map(|album| Album {
                name: Some(album.name),
                id: album.id,
                album_type: album.album_type,
                release_date: album.release_date,
                total_tracks: album.total_tracks,
                url: album.external_urls.spotify,
                images: album
                    .images
                    .into_iter()
                    .map(|i| Image {
                        url: i.url,
                        height: i.height,
                        width: i.width,
                    })
                    .collect(),
            })
            .unwrap_or_default();

        let urls = TrackUrls {
            track: track.external_urls.spotify,
            album: album.url.clone(),
            artist: artist_url,
        };

        Track {
            name: track.name,
            artists: track
                .artists
                .into_iter()
                .map(|a| Artist {
                    name: a.name,
                    id: a.id,
                    url: a.external_urls.spotify,
                })
                .collect(),
            album,
            duration_ms: track.duration_ms,
            popularity: track.popularity,
            track_number: track.track_number,
            disc_number: track.disc_number,
            explicit: track.explicit,
            is_local: track.is_local,
            preview_url: track.preview_url,
            urls,
        }
    }
}

/// The resolver's output for one request.
///
/// `track` is `None` when neither the currently playing nor the recently
/// played endpoint yielded an item; presenters render that as their "no
/// track" state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaybackSnapshot {
    pub track: Option<Track>,
    pub is_playing: bool,
    pub progress_ms: u64,
    pub shuffle_state: bool,
    pub repeat_state: RepeatState,
    pub device: Option<Device>,
    /// Set only for tracks taken from the recently played history.
    pub played_at: Option<DateTime<Utc>>,
}

impl PlaybackSnapshot {
    pub fn is_empty(&self) -> bool {
        self.track.is_none()
    }

    pub fn has_active_device(&self) -> bool {
        self.device.as_ref().is_some_and(|d| d.is_active)
    }
}

#[derive(Tabled)]
pub struct SnapshotTableRow {
    pub field: String,
    pub value: String,
}

impl SnapshotTableRow {
    pub fn new(field: &str, value: &str) -> Self {
        SnapshotTableRow {
            field: field.to_string(),
            value: value.to_string(),
        }
    }
}
