use crate::{
    error::NowPlayingError,
    types::{PlaybackSnapshot, Track},
    utils::{
        ARTIST_LINE_LIMIT, PROGRESS_BAR_WIDTH, escape_xml, format_duration,
        marquee_distance, progress_width, truncate_chars,
    },
};

pub const WIDTH: u32 = 500;
pub const HEIGHT: u32 = 130;

/// Picks the badge for a resolution outcome. Always returns a complete SVG
/// document, whatever the outcome was.
pub fn badge(outcome: &Result<PlaybackSnapshot, NowPlayingError>) -> String {
    match outcome {
        Err(NowPlayingError::Config) => config_error_badge(),
        Err(NowPlayingError::Auth(_)) => connection_error_badge(),
        Ok(snapshot) => match &snapshot.track {
            Some(track) => track_badge(snapshot, track),
            None => empty_badge(),
        },
    }
}

pub fn config_error_badge() -> String {
    error_panel("⚙", "Configuration Error", "Missing Spotify credentials")
}

pub fn connection_error_badge() -> String {
    error_panel("⚠", "Connection Error", "Unable to connect to Spotify")
}

fn error_panel(icon: &str, title: &str, detail: &str) -> String {
    format!(
        r##"<svg width="{w}" height="{h}" xmlns="http://www.w3.org/2000/svg">
  <defs>
    <linearGradient id="bg-gradient" x1="0%" y1="0%" x2="100%" y2="100%">
      <stop offset="0%" style="stop-color:#dc2626"/>
      <stop offset="50%" style="stop-color:#991b1b"/>
      <stop offset="100%" style="stop-color:#7c1d1d"/>
    </linearGradient>
  </defs>
  <rect width="{w}" height="{h}" fill="url(#bg-gradient)" rx="15"/>
  <rect x="3" y="3" width="494" height="124" fill="#1f1f1f" rx="12"/>
  <rect x="15" y="15" width="100" height="100" fill="#dc2626" rx="10"/>
  <text x="65" y="75" text-anchor="middle" fill="white" font-family="Arial, sans-serif" font-size="32" font-weight="bold">{icon}</text>
  <text x="135" y="50" text-anchor="start" fill="#ff6b6b" font-family="Arial, sans-serif" font-size="18" font-weight="bold">{title}</text>
  <text x="135" y="75" text-anchor="start" fill="#ff9999" font-family="Arial, sans-serif" font-size="14">{detail}</text>
  <rect x="0" y="0" width="{w}" height="{h}" fill="none" stroke="#dc2626" stroke-width="2" rx="15"/>
</svg>
"##,
        w = WIDTH,
        h = HEIGHT,
        icon = icon,
        title = title,
        detail = detail,
    )
}

pub fn empty_badge() -> String {
    let dots: String = [(0, "0s"), (8, "0.2s"), (16, "0.4s")]
        .iter()
        .map(|(cx, begin)| {
            format!(
                r##"      <circle cx="{cx}" cy="0" r="2" fill="#6b7280">
        <animate attributeName="opacity" values="0.3;1;0.3" dur="1.5s" begin="{begin}" repeatCount="indefinite"/>
      </circle>
"##
            )
        })
        .collect();

    format!(
        r##"<svg width="{w}" height="{h}" xmlns="http://www.w3.org/2000/svg">
  <defs>
    <linearGradient id="bg-gradient" x1="0%" y1="0%" x2="100%" y2="100%">
      <stop offset="0%" style="stop-color:#374151"/>
      <stop offset="50%" style="stop-color:#4b5563"/>
      <stop offset="100%" style="stop-color:#6b7280"/>
    </linearGradient>
  </defs>
  <rect width="{w}" height="{h}" fill="url(#bg-gradient)" rx="15"/>
  <rect x="3" y="3" width="494" height="124" fill="#1f2937" rx="12"/>
  <rect x="15" y="15" width="100" height="100" fill="#4b5563" rx="10"/>
  <text x="65" y="75" text-anchor="middle" fill="#9ca3af" font-family="Arial, sans-serif" font-size="32" font-weight="bold">♪</text>
  <text x="135" y="50" text-anchor="start" fill="#9ca3af" font-family="Arial" font-size="18" font-weight="bold">No music playing</text>
  <text x="135" y="75" text-anchor="start" fill="#6b7280" font-family="Arial" font-size="14">Play something on Spotify</text>
  <g transform="translate(135, 90)">
{dots}  </g>
  <rect x="0" y="0" width="{w}" height="{h}" fill="none" stroke="#4b5563" stroke-width="2" rx="15"/>
</svg>
"##,
        w = WIDTH,
        h = HEIGHT,
        dots = dots,
    )
}

/// The badge for a resolved track.
pub fn track_badge(snapshot: &PlaybackSnapshot, track: &Track) -> String {
    let title = if track.name.is_empty() {
        "Unknown"
    } else {
        track.name.as_str()
    };
    let artists = track.artist_names();
    let artist_line = if artists.is_empty() {
        "Unknown".to_string()
    } else {
        truncate_chars(&artists, ARTIST_LINE_LIMIT)
    };

    let status = if snapshot.is_playing {
        "🎵 Now Playing"
    } else {
        "⏸️ Recently Played"
    };

    format!(
        r##"<svg width="{w}" height="{h}" xmlns="http://www.w3.org/2000/svg">
  <defs>
    <linearGradient id="rainbow" x1="0%" y1="0%" x2="100%" y2="0%">
      <stop offset="0%" style="stop-color:#ff0000"/>
      <stop offset="16.66%" style="stop-color:#ff8000"/>
      <stop offset="33.33%" style="stop-color:#ffff00"/>
      <stop offset="50%" style="stop-color:#00ff00"/>
      <stop offset="66.66%" style="stop-color:#0080ff"/>
      <stop offset="83.33%" style="stop-color:#8000ff"/>
      <stop offset="100%" style="stop-color:#ff0080"/>
    </linearGradient>
    <linearGradient id="bg-gradient" x1="0%" y1="0%" x2="100%" y2="100%">
      <stop offset="0%" style="stop-color:#1e3a8a"/>
      <stop offset="50%" style="stop-color:#7c3aed"/>
      <stop offset="100%" style="stop-color:#ec4899"/>
    </linearGradient>
    <linearGradient id="spotify-green" x1="0%" y1="0%" x2="100%" y2="0%">
      <stop offset="0%" style="stop-color:#1db954"/>
      <stop offset="100%" style="stop-color:#1ed760"/>
    </linearGradient>
    <clipPath id="titleClip">
      <rect x="135" y="50" width="340" height="25"/>
    </clipPath>
  </defs>
  <rect width="{w}" height="{h}" fill="url(#bg-gradient)" rx="15"/>
  <rect x="3" y="3" width="494" height="124" fill="#0d1117" rx="12"/>
{cover}  <text x="135" y="40" fill="url(#rainbow)" font-family="Arial, sans-serif" font-size="13" font-weight="bold">{status}</text>
  <g clip-path="url(#titleClip)">
    <text x="135" y="70" fill="white" font-family="Arial, sans-serif" font-size="20" font-weight="bold">{title}{marquee}</text>
  </g>
  <text x="135" y="90" fill="#b3b3b3" font-family="Arial, sans-serif" font-size="14">by {artist}</text>
{progress}{visualizer}  <rect x="0" y="0" width="{w}" height="{h}" fill="none" stroke="url(#rainbow)" stroke-width="3" rx="15"/>
</svg>
"##,
        w = WIDTH,
        h = HEIGHT,
        cover = cover(track.album_image()),
        status = status,
        title = escape_xml(title),
        marquee = marquee(title),
        artist = escape_xml(&artist_line),
        progress = progress(snapshot, track),
        visualizer = visualizer(snapshot.is_playing),
    )
}

fn cover(image: Option<&str>) -> String {
    match image {
        Some(url) => format!(
            r##"  <image x="15" y="15" width="100" height="100" href="{}" preserveAspectRatio="xMidYMid slice"/>
"##,
            escape_xml(url)
        ),
        None => r##"  <rect x="15" y="15" width="100" height="100" fill="url(#spotify-green)" rx="10"/>
  <text x="65" y="75" text-anchor="middle" fill="white" font-family="Arial, sans-serif" font-size="32" font-weight="bold">♪</text>
"##
        .to_string(),
    }
}

fn marquee(title: &str) -> String {
    match marquee_distance(title) {
        Some(distance) => format!(
            r#"<animateTransform attributeName="transform" type="translate" values="0,0; -{d},0; -{d},0; 0,0" dur="8s" repeatCount="indefinite"/>"#,
            d = distance
        ),
        None => String::new(),
    }
}

fn progress(snapshot: &PlaybackSnapshot, track: &Track) -> String {
    if !snapshot.is_playing || track.duration_ms == 0 {
        return String::new();
    }

    format!(
        r##"  <rect x="135" y="100" width="{bar}" height="4" fill="#333" rx="2"/>
  <rect x="135" y="100" width="{filled:.1}" height="4" fill="url(#spotify-green)" rx="2"/>
  <text x="445" y="108" fill="#888" font-family="Arial, sans-serif" font-size="10">{elapsed} / {total}</text>
"##,
        bar = PROGRESS_BAR_WIDTH,
        filled = progress_width(snapshot.progress_ms, track.duration_ms),
        elapsed = format_duration(snapshot.progress_ms),
        total = format_duration(track.duration_ms),
    )
}

// (x, y, height, peak height, peak y, duration, begin)
const EQUALIZER_BARS: [(u32, f32, u32, u32, f32, &str, &str); 5] = [
    (0, 10.0, 10, 25, 2.5, "1.2s", "0s"),
    (5, 8.0, 14, 30, 0.0, "1.1s", "0.2s"),
    (10, 12.0, 6, 20, 5.0, "1.3s", "0.4s"),
    (15, 5.0, 20, 35, -2.5, "1s", "0.6s"),
    (20, 9.0, 12, 28, 1.0, "1.4s", "0.8s"),
];

fn visualizer(is_playing: bool) -> String {
    if !is_playing {
        return r##"  <g transform="translate(460, 30)">
    <rect x="0" y="0" width="4" height="15" fill="#666" rx="2"/>
    <rect x="8" y="0" width="4" height="15" fill="#666" rx="2"/>
  </g>
"##
        .to_string();
    }

    let bars: String = EQUALIZER_BARS
        .iter()
        .map(|(x, y, height, peak, peak_y, dur, begin)| {
            format!(
                r##"    <rect x="{x}" y="{y}" width="3" height="{height}" fill="#1db954" rx="1.5">
      <animate attributeName="height" values="{height};{peak};{height}" dur="{dur}" begin="{begin}" repeatCount="indefinite"/>
      <animate attributeName="y" values="{y};{peak_y};{y}" dur="{dur}" begin="{begin}" repeatCount="indefinite"/>
    </rect>
"##
            )
        })
        .collect();

    format!(
        r##"  <g transform="translate(450, 25)">
{bars}  </g>
"##
    )
}
