//! Spotify Now Playing Library
//!
//! This library resolves what a Spotify account is currently listening to
//! (falling back to the most recently played track) and renders the result
//! as compact JSON, extended JSON or an embeddable SVG badge. It also ships
//! the small HTML flow used once to obtain a refresh token.
//!
//! # Modules
//!
//! - `api` - HTTP handlers for the JSON, SVG and login endpoints
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `error` - Error taxonomy shared by the resolver and the handlers
//! - `management` - The now-playing resolver
//! - `render` - Side-effect free JSON, SVG and HTML presenters
//! - `server` - Router construction and the HTTP server
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Upstream payloads and normalized playback records
//! - `utils` - Formatting helpers
//!
//! # Example
//!
//! ```
//! use nowplaying::{config, management::NowPlayingResolver, spotify::SpotifyClient};
//!
//! #[tokio::main]
//! async fn main() -> nowplaying::Res<()> {
//!     config::load_env().await?;
//!     let credentials = config::Credentials::from_env()?;
//!     let client = SpotifyClient::from_config();
//!     let snapshot = NowPlayingResolver::new(&client).resolve(&credentials).await?;
//!     println!("{:?}", snapshot.track.map(|t| t.name));
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod management;
pub mod render;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Provides a standard error handling pattern for the CLI and server
/// plumbing using a boxed dynamic error trait object. The resolver itself
/// returns the typed [`error::NowPlayingError`].
///
/// # Type Parameters
///
/// - `T` - The success type returned on successful operations
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// Creates a formatted output line with a distinctive blue "o" indicator
/// followed by the provided message. Used for general information and
/// status updates throughout the application.
///
/// # Example
///
/// ```
/// info!("Listening on {}", addr);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Resolved {}", track.name);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Creates a formatted error output with a red "!" indicator and immediately
/// terminates the program with exit code 1. Only the CLI uses this; request
/// handlers never exit the process.
///
/// # Example
///
/// ```
/// error!("Failed to bind {}", addr);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues, such as an upstream call that failed and
/// was replaced by default data.
///
/// # Example
///
/// ```
/// warning!("Playback state unavailable: {}", err);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
