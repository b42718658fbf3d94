use axum::{Router, routing::get};
use std::{net::SocketAddr, str::FromStr, sync::Arc};

use crate::{
    Res, api,
    config::{self, Credentials},
    info,
    spotify::{SpotifyApi, SpotifyClient},
    warning,
};

/// Read-only state shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    /// `None` when any of the three secrets is missing.
    pub credentials: Option<Credentials>,
    pub spotify: Arc<dyn SpotifyApi>,
    pub oauth: OAuthSettings,
}

/// What the login page needs to build links and instructions.
#[derive(Debug, Clone)]
pub struct OAuthSettings {
    pub client_id: Option<String>,
    pub redirect_uri: String,
    pub authorize_url: String,
    pub token_url: String,
}

impl OAuthSettings {
    pub fn from_config() -> Self {
        OAuthSettings {
            client_id: config::spotify_client_id(),
            redirect_uri: config::spotify_redirect_uri(),
            authorize_url: config::spotify_apiauth_url(),
            token_url: config::spotify_apitoken_url(),
        }
    }
}

impl AppState {
    pub fn from_config() -> Self {
        let credentials = match Credentials::from_env() {
            Ok(credentials) => Some(credentials),
            Err(e) => {
                warning!("{}; now-playing endpoints will report a configuration error", e);
                None
            }
        };

        AppState {
            credentials,
            spotify: Arc::new(SpotifyClient::from_config()),
            oauth: OAuthSettings::from_config(),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/api/spotify-data", get(api::spotify_data))
        .route("/api/spotify-info", get(api::spotify_info))
        .route("/api/spotify", get(api::spotify_badge))
        .route("/api/login", get(api::login))
        .with_state(state)
}

pub async fn start_api_server(addr: &str, state: AppState) -> Res<()> {
    let addr = SocketAddr::from_str(addr)?;
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("Listening on http://{}", addr);
    axum::serve(listener, router(state)).await?;
    Ok(())
}
