//! # Presenters
//!
//! Pure rendering functions. Each presenter takes the resolver's
//! [`PlaybackSnapshot`](crate::types::PlaybackSnapshot) (or the error that
//! replaced it) and produces a response body. Nothing here performs I/O or
//! reads the clock; the extended JSON presenter receives the render time as an
//! argument.
//!
//! - [`json`] - compact and extended JSON bodies
//! - [`svg`] - the 500×130 "now playing" badge and its fixed error variants
//! - [`html`] - pages for the one-time authorization code flow

pub mod html;
pub mod json;
pub mod svg;
