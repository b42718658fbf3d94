//! # Spotify Integration Module
//!
//! This module is the integration layer between the resolver and the Spotify
//! Web API. It covers exactly the endpoints the now-playing service needs:
//!
//! ### Authentication
//! - `POST /api/token` - Exchange a refresh token for a short-lived access token
//! - `GET /authorize` - Browser authorization URL used once to obtain a code
//!
//! ### Player
//! - `GET /me/player/currently-playing` - The track in the active session
//! - `GET /me/player/recently-played?limit=1` - The last played track
//! - `GET /me/player` - Device, shuffle and repeat state
//!
//! ## Architecture
//!
//! ```text
//! HTTP handlers / CLI
//!          ↓
//! NowPlayingResolver (management)
//!          ↓
//! SpotifyApi trait  ←  SpotifyClient (reqwest) or a test double
//!          ↓
//! Spotify Web API
//! ```
//!
//! The [`SpotifyApi`] trait is the seam the resolver is written against, so
//! its ordering and fallback rules can be exercised without the network.
//!
//! ## Error Types
//!
//! - Token exchange failures are [`NowPlayingError::Auth`] and are fatal.
//! - Player endpoint failures are [`UpstreamError`] and are absorbed by the
//!   resolver.
//!
//! No call is retried and no token is cached: every resolution starts with a
//! fresh token exchange.

pub mod auth;
pub mod player;

use async_trait::async_trait;
use reqwest::Client;

use crate::{
    config::{self, Credentials},
    error::{NowPlayingError, UpstreamError},
    types::{CurrentlyPlayingResponse, PlaybackStateResponse, RecentlyPlayedResponse},
};

/// The upstream calls one resolution may make, in the order it makes them.
#[async_trait]
pub trait SpotifyApi: Send + Sync {
    /// Exchanges the refresh token for an access token.
    async fn refresh_access_token(&self, credentials: &Credentials)
    -> Result<String, NowPlayingError>;

    /// `Ok(None)` means the endpoint answered 204, nothing is playing.
    async fn currently_playing(
        &self,
        access_token: &str,
    ) -> Result<Option<CurrentlyPlayingResponse>, UpstreamError>;

    async fn recently_played(
        &self,
        access_token: &str,
    ) -> Result<RecentlyPlayedResponse, UpstreamError>;

    /// `Ok(None)` means there is no active device.
    async fn playback_state(
        &self,
        access_token: &str,
    ) -> Result<Option<PlaybackStateResponse>, UpstreamError>;
}

/// [`SpotifyApi`] backed by reqwest.
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    client: Client,
    api_url: String,
    token_url: String,
}

impl SpotifyClient {
    pub fn new(api_url: impl Into<String>, token_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), api_url, token_url)
    }

    /// Same as [`new`](Self::new) with a preconfigured reqwest client.
    pub fn with_client(
        client: Client,
        api_url: impl Into<String>,
        token_url: impl Into<String>,
    ) -> Self {
        SpotifyClient {
            client,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            token_url: token_url.into(),
        }
    }

    /// Uses the configured API and token URLs.
    pub fn from_config() -> Self {
        Self::new(config::spotify_apiurl(), config::spotify_apitoken_url())
    }
}

#[async_trait]
impl SpotifyApi for SpotifyClient {
    async fn refresh_access_token(
        &self,
        credentials: &Credentials,
    ) -> Result<String, NowPlayingError> {
        auth::refresh_access_token(&self.client, &self.token_url, credentials).await
    }

    async fn currently_playing(
        &self,
        access_token: &str,
    ) -> Result<Option<CurrentlyPlayingResponse>, UpstreamError> {
        player::currently_playing(&self.client, &self.api_url, access_token).await
    }

    async fn recently_played(
        &self,
        access_token: &str,
    ) -> Result<RecentlyPlayedResponse, UpstreamError> {
        player::recently_played(&self.client, &self.api_url, access_token).await
    }

    async fn playback_state(
        &self,
        access_token: &str,
    ) -> Result<Option<PlaybackStateResponse>, UpstreamError> {
        player::playback_state(&self.client, &self.api_url, access_token).await
    }
}
