//! # API Module
//!
//! HTTP handlers for the now-playing service. Every request performs its own
//! resolution through [`NowPlayingResolver`](crate::management::NowPlayingResolver);
//! nothing is shared between requests except read-only configuration.
//!
//! ## Endpoints
//!
//! - [`spotify_data`] - compact JSON summary (`GET /api/spotify-data`)
//! - [`spotify_info`] - extended JSON with playback and device state
//!   (`GET /api/spotify-info`)
//! - [`spotify_badge`] - SVG "now playing" badge (`GET /api/spotify`)
//! - [`login`] - one-time authorization code helper (`GET /api/login`)
//! - [`health`] - status and version (`GET /health`)
//!
//! ## Status codes
//!
//! The JSON endpoints answer 500 only when credentials are missing; every
//! other failure is encoded in a 200 body. The badge endpoint always answers
//! 200 with a valid SVG document.

mod badge;
mod health;
mod login;
mod now_playing;

pub use badge::spotify_badge;
pub use health::health;
pub use login::login;
pub use now_playing::{spotify_data, spotify_info};

use axum::{
    http::{HeaderValue, header::CACHE_CONTROL},
    response::Response,
};

pub const DATA_CACHE_CONTROL: &str = "public, max-age=30";
pub const INFO_CACHE_CONTROL: &str = "public, max-age=10";
pub const BADGE_CACHE_CONTROL: &str = "public, max-age=60";

fn cached(mut response: Response, value: &'static str) -> Response {
    response
        .headers_mut()
        .insert(CACHE_CONTROL, HeaderValue::from_static(value));
    response
}
