use axum::{
    extract::State,
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
};

use crate::{
    error::NowPlayingError, management::NowPlayingResolver, render::svg, server::AppState,
    warning,
};

use super::{BADGE_CACHE_CONTROL, cached};

pub const SVG_CONTENT_TYPE: &str = "image/svg+xml";

/// Renders the badge for whatever the resolution produced. Errors select one
/// of the fixed badge variants and are never surfaced as a non-SVG response.
pub async fn spotify_badge(State(state): State<AppState>) -> Response {
    let outcome = match &state.credentials {
        Some(credentials) => {
            NowPlayingResolver::new(state.spotify.as_ref())
                .resolve(credentials)
                .await
        }
        None => Err(NowPlayingError::Config),
    };

    if let Err(e) = &outcome {
        warning!("Rendering error badge: {}", e);
    }

    let found = matches!(&outcome, Ok(snapshot) if !snapshot.is_empty());
    let response = ([(CONTENT_TYPE, SVG_CONTENT_TYPE)], svg::badge(&outcome)).into_response();

    if found {
        cached(response, BADGE_CACHE_CONTROL)
    } else {
        response
    }
}
