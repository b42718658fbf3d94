//! Error taxonomy for the now-playing service.
//!
//! Only [`NowPlayingError`] crosses the resolver boundary. Everything the
//! upstream client reports for the secondary calls is an [`UpstreamError`],
//! which the resolver absorbs and turns into absent data.

use reqwest::StatusCode;
use thiserror::Error;

/// Failures that abort a single resolution.
#[derive(Error, Debug)]
pub enum NowPlayingError {
    /// One or more of the client id, client secret or refresh token is unset.
    #[error("Missing Spotify credentials")]
    Config,

    /// The refresh token could not be exchanged for an access token.
    #[error("Authentication failed: {0}")]
    Auth(String),
}

/// A failed call against one of the player endpoints.
#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected status {0}")]
    Status(StatusCode),
}

impl UpstreamError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            UpstreamError::Http(e) => e.status(),
            UpstreamError::Status(s) => Some(*s),
        }
    }
}
