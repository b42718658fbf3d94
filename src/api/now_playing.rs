use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;

use crate::{
    management::NowPlayingResolver,
    render::json,
    server::AppState,
    warning,
};

use super::{DATA_CACHE_CONTROL, INFO_CACHE_CONTROL, cached};

pub async fn spotify_data(State(state): State<AppState>) -> Response {
    let Some(credentials) = &state.credentials else {
        return missing_credentials();
    };

    match NowPlayingResolver::new(state.spotify.as_ref())
        .resolve(credentials)
        .await
    {
        Ok(snapshot) if snapshot.is_empty() => Json(json::compact(&snapshot)).into_response(),
        Ok(snapshot) => cached(
            Json(json::compact(&snapshot)).into_response(),
            DATA_CACHE_CONTROL,
        ),
        Err(e) => {
            warning!("Spotify API error: {}", e);
            Json(json::compact_error()).into_response()
        }
    }
}

pub async fn spotify_info(State(state): State<AppState>) -> Response {
    let Some(credentials) = &state.credentials else {
        return missing_credentials();
    };

    match NowPlayingResolver::new(state.spotify.as_ref())
        .with_playback_state()
        .resolve(credentials)
        .await
    {
        Ok(snapshot) if snapshot.is_empty() => {
            Json(json::extended(&snapshot, Utc::now())).into_response()
        }
        Ok(snapshot) => cached(
            Json(json::extended(&snapshot, Utc::now())).into_response(),
            INFO_CACHE_CONTROL,
        ),
        Err(e) => {
            warning!("Spotify API error: {}", e);
            Json(json::extended_error(&e)).into_response()
        }
    }
}

fn missing_credentials() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json::missing_credentials()),
    )
        .into_response()
}
