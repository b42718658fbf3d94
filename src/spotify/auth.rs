use reqwest::{Client, Url, header::AUTHORIZATION};

use crate::{config::Credentials, error::NowPlayingError, types::TokenResponse, utils};

/// Scopes requested when authorizing the account once.
pub const SCOPES: [&str; 3] = [
    "user-read-currently-playing",
    "user-read-recently-played",
    "user-read-playback-state",
];

/// Exchanges a refresh token for a fresh access token.
///
/// Sends the `refresh_token` grant to Spotify's token endpoint, authenticating
/// the application with HTTP Basic auth built from the client id and secret.
///
/// # Arguments
///
/// * `client` - HTTP client used for the request
/// * `token_url` - Token endpoint, e.g. `https://accounts.spotify.com/api/token`
/// * `credentials` - Client id, client secret and the long-lived refresh token
///
/// # Returns
///
/// Returns the access token on success.
///
/// # Errors
///
/// Every failure maps to [`NowPlayingError::Auth`]:
/// - Network connectivity issues
/// - Any non-2xx status (revoked or invalid refresh token, bad client secret)
/// - A body without an `access_token` field
///
/// # Example
///
/// ```
/// let access_token = refresh_access_token(&client, &token_url, &credentials).await?;
/// ```
pub async fn refresh_access_token(
    client: &Client,
    token_url: &str,
    credentials: &Credentials,
) -> Result<String, NowPlayingError> {
    let res = client
        .post(token_url)
        .header(
            AUTHORIZATION,
            utils::basic_auth_header(&credentials.client_id, &credentials.client_secret),
        )
        .form(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", credentials.refresh_token.as_str()),
        ])
        .send()
        .await
        .map_err(|e| NowPlayingError::Auth(e.to_string()))?;

    let status = res.status();
    if !status.is_success() {
        return Err(NowPlayingError::Auth(format!(
            "token endpoint returned {}",
            status
        )));
    }

    let token: TokenResponse = res
        .json()
        .await
        .map_err(|e| NowPlayingError::Auth(e.to_string()))?;

    token
        .access_token
        .filter(|t| !t.is_empty())
        .ok_or_else(|| NowPlayingError::Auth("No access token received".to_string()))
}

/// Builds the browser URL that starts the authorization code flow.
///
/// The user opens this URL once, grants the [`SCOPES`], and Spotify redirects
/// back to `redirect_uri` with a `code` query parameter.
///
/// # Example
///
/// ```
/// let url = authorize_url(
///     "https://accounts.spotify.com/authorize",
///     "abc123",
///     "http://127.0.0.1:3000/api/login",
/// )?;
/// ```
pub fn authorize_url(auth_url: &str, client_id: &str, redirect_uri: &str) -> Result<String, String> {
    let scope = SCOPES.join(" ");
    Url::parse_with_params(
        auth_url,
        &[
            ("client_id", client_id),
            ("response_type", "code"),
            ("redirect_uri", redirect_uri),
            ("scope", scope.as_str()),
        ],
    )
    .map(String::from)
    .map_err(|e| e.to_string())
}
