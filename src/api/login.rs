use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
};

use crate::{render::html, server::AppState, spotify::auth, warning};

/// Helper for obtaining a refresh token once.
///
/// - `?error=...` - Spotify rejected the authorization; 400 with an error page.
/// - `?code=...` - shows the code and the token request to run by hand.
/// - neither - shows the link to Spotify's authorize endpoint; 400.
///
/// This handler never calls the token endpoint itself.
pub async fn login(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<AppState>,
) -> (StatusCode, Html<String>) {
    let oauth = &state.oauth;

    if let Some(error) = param(&params, "error") {
        return (StatusCode::BAD_REQUEST, Html(html::error_page(error)));
    }

    if let Some(code) = param(&params, "code") {
        let client_id = oauth.client_id.as_deref().unwrap_or("<client_id>");
        return (
            StatusCode::OK,
            Html(html::code_page(
                code,
                client_id,
                &oauth.redirect_uri,
                &oauth.token_url,
            )),
        );
    }

    let Some(client_id) = oauth.client_id.as_deref() else {
        warning!("Login page requested but SPOTIFY_CLIENT_ID is not set");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html(html::error_page("Missing Spotify client id")),
        );
    };

    match auth::authorize_url(&oauth.authorize_url, client_id, &oauth.redirect_uri) {
        Ok(url) => (StatusCode::BAD_REQUEST, Html(html::authorize_page(&url))),
        Err(e) => {
            warning!("Cannot build authorize URL: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(html::error_page("Invalid authorization endpoint")),
            )
        }
    }
}

// Empty values count as absent.
fn param<'a>(params: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    params.get(key).map(String::as_str).filter(|v| !v.is_empty())
}
