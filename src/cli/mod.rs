//! # CLI Module
//!
//! Command implementations for the `nowplaying` binary. Each function is a
//! complete command: it loads what it needs from [`crate::config`], reports
//! progress with the crate's console macros, and exits with an error message
//! when something fatal happens.
//!
//! ## Commands
//!
//! - [`serve`] - runs the HTTP service with the JSON, SVG and login endpoints
//! - [`now_playing`] - performs one resolution and prints it as a table, JSON
//!   or SVG
//! - [`auth`] - prints and opens the Spotify authorization URL
//!
//! ## Usage Patterns
//!
//! ### Initial Setup
//! ```bash
//! nowplaying auth                          # Authorize once, note the code
//! nowplaying serve                         # Serve /api/login to finish the flow
//! ```
//!
//! ### Regular Usage
//! ```bash
//! nowplaying serve --addr 0.0.0.0:8080
//! nowplaying now-playing                   # Table in the terminal
//! nowplaying now-playing --format svg > badge.svg
//! ```

mod auth;
mod now_playing;
mod serve;

pub use auth::auth;
pub use now_playing::{OutputFormat, now_playing};
pub use serve::serve;
