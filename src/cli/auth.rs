use crate::{config, error, info, spotify, warning};

/// Opens the Spotify authorization page in the default browser.
///
/// After the user grants access, Spotify redirects to the configured redirect
/// URI (the `/api/login` route of a running server by default), which shows
/// the authorization code and the request that turns it into a refresh token.
pub async fn auth() {
    let Some(client_id) = config::spotify_client_id() else {
        error!("SPOTIFY_CLIENT_ID must be set to authorize.");
    };

    let auth_url = match spotify::auth::authorize_url(
        &config::spotify_apiauth_url(),
        &client_id,
        &config::spotify_redirect_uri(),
    ) {
        Ok(url) => url,
        Err(e) => error!("Cannot build authorization URL: {}", e),
    };

    info!("Authorization URL: {}", auth_url);
    info!(
        "Spotify will redirect to {} with a code.",
        config::spotify_redirect_uri()
    );

    if webbrowser::open(&auth_url).is_err() {
        warning!("Failed to open browser. Please navigate to the URL above manually.");
    }
}
