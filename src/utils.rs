use base64::{Engine, engine::general_purpose::STANDARD};

pub const PROGRESS_BAR_WIDTH: f64 = 300.0;
pub const MARQUEE_THRESHOLD: usize = 25;
pub const MARQUEE_CHAR_WIDTH: usize = 12;
pub const ARTIST_LINE_LIMIT: usize = 35;

/// `Basic base64(client_id:client_secret)`
pub fn basic_auth_header(client_id: &str, client_secret: &str) -> String {
    let raw = format!("{}:{}", client_id, client_secret);
    format!("Basic {}", STANDARD.encode(raw))
}

/// Formats milliseconds as `m:ss`.
pub fn format_duration(ms: u64) -> String {
    let total_secs = ms / 1000;
    format!("{}:{:02}", total_secs / 60, total_secs % 60)
}

/// Cuts `text` after `limit` characters and appends `...` when it was longer.
pub fn truncate_chars(text: &str, limit: usize) -> String {
    if text.chars().count() > limit {
        let head: String = text.chars().take(limit).collect();
        format!("{}...", head)
    } else {
        text.to_string()
    }
}

/// Width of the filled part of the progress bar, clamped to `PROGRESS_BAR_WIDTH`.
pub fn progress_width(progress_ms: u64, duration_ms: u64) -> f64 {
    if duration_ms == 0 {
        return 0.0;
    }
    let ratio = progress_ms as f64 / duration_ms as f64;
    (ratio * PROGRESS_BAR_WIDTH).min(PROGRESS_BAR_WIDTH)
}

/// Horizontal travel of the title marquee, `None` when the title fits.
pub fn marquee_distance(title: &str) -> Option<usize> {
    let len = title.chars().count();
    (len > MARQUEE_THRESHOLD).then(|| (len - MARQUEE_THRESHOLD) * MARQUEE_CHAR_WIDTH)
}

/// Escapes text for use inside XML/HTML content and attribute values.
pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Year part of a Spotify release date (`YYYY`, `YYYY-MM` or `YYYY-MM-DD`).
pub fn release_year(release_date: &str) -> &str {
    release_date.split('-').next().unwrap_or_default()
}
