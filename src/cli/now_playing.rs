use std::time::Duration;

use chrono::Utc;
use clap::ValueEnum;
use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    config::Credentials,
    error,
    management::NowPlayingResolver,
    render::{json, svg},
    spotify::SpotifyClient,
    success,
    types::{PlaybackSnapshot, SnapshotTableRow},
    utils, warning,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Field/value table
    Table,
    /// Compact JSON, as served by /api/spotify-data
    Json,
    /// Extended JSON, as served by /api/spotify-info
    Extended,
    /// SVG badge, as served by /api/spotify
    Svg,
}

pub async fn now_playing(format: OutputFormat) {
    let credentials = Credentials::from_env();

    if format == OutputFormat::Svg {
        let outcome = match &credentials {
            Ok(credentials) => resolve(credentials, false).await,
            Err(_) => Err(crate::error::NowPlayingError::Config),
        };
        println!("{}", svg::badge(&outcome));
        return;
    }

    let credentials = match credentials {
        Ok(c) => c,
        Err(e) => error!(
            "{}. Set SPOTIFY_CLIENT_ID, SPOTIFY_CLIENT_SECRET and SPOTIFY_REFRESH_TOKEN.",
            e
        ),
    };

    let snapshot = match resolve(&credentials, format != OutputFormat::Json).await {
        Ok(snapshot) => snapshot,
        Err(e) => error!("Cannot resolve current track: {}", e),
    };

    match format {
        OutputFormat::Json => print_json(&json::compact(&snapshot)),
        OutputFormat::Extended => print_json(&json::extended(&snapshot, Utc::now())),
        _ => print_table(&snapshot),
    }
}

async fn resolve(
    credentials: &Credentials,
    with_playback_state: bool,
) -> Result<PlaybackSnapshot, crate::error::NowPlayingError> {
    let pb = ProgressBar::new_spinner();
    pb.set_message("Asking Spotify what is playing...");
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }

    let client = SpotifyClient::from_config();
    let mut resolver = NowPlayingResolver::new(&client);
    if with_playback_state {
        resolver = resolver.with_playback_state();
    }
    let outcome = resolver.resolve(credentials).await;

    pb.finish_and_clear();
    outcome
}

fn print_json(value: &serde_json::Value) {
    match serde_json::to_string_pretty(value) {
        Ok(body) => println!("{}", body),
        Err(e) => error!("Cannot serialize response: {}", e),
    }
}

fn print_table(snapshot: &PlaybackSnapshot) {
    let Some(track) = &snapshot.track else {
        warning!("No track found. Play something on Spotify.");
        return;
    };

    if snapshot.is_playing {
        success!("Now playing");
    } else {
        success!("Recently played");
    }

    let mut rows = vec![
        SnapshotTableRow::new("Title", &track.name),
        SnapshotTableRow::new("Artist", &track.artist_names()),
        SnapshotTableRow::new("Album", track.album.name.as_deref().unwrap_or_default()),
        SnapshotTableRow::new(
            "Year",
            utils::release_year(track.album.release_date.as_deref().unwrap_or_default()),
        ),
        SnapshotTableRow::new(
            "Position",
            &format!(
                "{} / {}",
                utils::format_duration(snapshot.progress_ms),
                utils::format_duration(track.duration_ms)
            ),
        ),
        SnapshotTableRow::new("Shuffle", if snapshot.shuffle_state { "on" } else { "off" }),
        SnapshotTableRow::new("Repeat", snapshot.repeat_state.as_str()),
    ];

    if let Some(device) = &snapshot.device {
        rows.push(SnapshotTableRow::new(
            "Device",
            &format!("{} ({})", device.name, device.device_type),
        ));
    }
    if let Some(url) = &track.urls.track {
        rows.push(SnapshotTableRow::new("Link", url));
    }

    println!("{}", Table::new(rows));
}
