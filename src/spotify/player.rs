use reqwest::{Client, Response, StatusCode};

use crate::{
    error::UpstreamError,
    types::{CurrentlyPlayingResponse, PlaybackStateResponse, RecentlyPlayedResponse},
};

/// Fetches the track playing in the user's active session.
///
/// Returns `Ok(None)` when Spotify answers `204 No Content`, which is how the
/// endpoint reports that nothing is playing. Any other non-2xx status is an
/// [`UpstreamError::Status`].
pub async fn currently_playing(
    client: &Client,
    api_url: &str,
    token: &str,
) -> Result<Option<CurrentlyPlayingResponse>, UpstreamError> {
    let url = format!("{uri}/me/player/currently-playing", uri = api_url);
    let response = client.get(&url).bearer_auth(token).send().await?;

    match checked(response)? {
        Some(valid_response) => Ok(Some(valid_response.json().await?)),
        None => Ok(None),
    }
}

/// Fetches the single most recently played track.
pub async fn recently_played(
    client: &Client,
    api_url: &str,
    token: &str,
) -> Result<RecentlyPlayedResponse, UpstreamError> {
    let url = format!(
        "{uri}/me/player/recently-played?limit={limit}",
        uri = api_url,
        limit = 1
    );
    let response = client.get(&url).bearer_auth(token).send().await?;

    match checked(response)? {
        Some(valid_response) => Ok(valid_response.json().await?),
        None => Ok(RecentlyPlayedResponse::default()),
    }
}

/// Fetches device, shuffle and repeat state.
///
/// Returns `Ok(None)` on `204 No Content` (no active device).
pub async fn playback_state(
    client: &Client,
    api_url: &str,
    token: &str,
) -> Result<Option<PlaybackStateResponse>, UpstreamError> {
    let url = format!("{uri}/me/player", uri = api_url);
    let response = client.get(&url).bearer_auth(token).send().await?;

    match checked(response)? {
        Some(valid_response) => Ok(Some(valid_response.json().await?)),
        None => Ok(None),
    }
}

// 204 -> None, other 2xx -> Some, anything else is an error
fn checked(response: Response) -> Result<Option<Response>, UpstreamError> {
    let status = response.status();
    if status == StatusCode::NO_CONTENT {
        return Ok(None);
    }
    if !status.is_success() {
        return Err(UpstreamError::Status(status));
    }
    Ok(Some(response))
}
