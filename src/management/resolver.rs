use crate::{
    config::Credentials,
    error::NowPlayingError,
    spotify::SpotifyApi,
    types::{PlaybackSnapshot, RepeatState, Track},
    warning,
};

/// Determines what the account is listening to right now.
///
/// One call to [`resolve`](Self::resolve) performs, in order:
/// 1. a fresh token exchange (fatal on failure),
/// 2. the currently playing lookup,
/// 3. the recently played fallback, only when step 2 produced no track,
/// 4. the playback state lookup, when enabled with
///    [`with_playback_state`](Self::with_playback_state).
///
/// Steps 2 to 4 never fail the resolution. An upstream error is logged and
/// the affected fields keep their defaults.
pub struct NowPlayingResolver<'a> {
    api: &'a dyn SpotifyApi,
    playback_state: bool,
}

impl<'a> NowPlayingResolver<'a> {
    pub fn new(api: &'a dyn SpotifyApi) -> Self {
        NowPlayingResolver {
            api,
            playback_state: false,
        }
    }

    /// Also fetch shuffle, repeat and device information.
    pub fn with_playback_state(mut self) -> Self {
        self.playback_state = true;
        self
    }

    pub async fn resolve(
        &self,
        credentials: &Credentials,
    ) -> Result<PlaybackSnapshot, NowPlayingError> {
        let access_token = self.api.refresh_access_token(credentials).await?;

        let mut snapshot = match self.currently_playing(&access_token).await {
            Some(snapshot) => snapshot,
            None => self.recently_played(&access_token).await,
        };

        if self.playback_state {
            self.apply_playback_state(&access_token, &mut snapshot).await;
        }

        Ok(snapshot)
    }

    async fn currently_playing(&self, access_token: &str) -> Option<PlaybackSnapshot> {
        match self.api.currently_playing(access_token).await {
            Ok(Some(current)) => {
                let track = current.item?;
                Some(PlaybackSnapshot {
                    track: Some(Track::from(track)),
                    is_playing: current.is_playing,
                    progress_ms: current.progress_ms.unwrap_or(0),
                    ..PlaybackSnapshot::default()
                })
            }
            Ok(None) => None,
            Err(e) => {
                match e.status() {
                    Some(status) => warning!(
                        "Currently playing returned {}, checking recently played",
                        status
                    ),
                    None => warning!(
                        "Currently playing unavailable, checking recently played: {}",
                        e
                    ),
                }
                None
            }
        }
    }

    async fn recently_played(&self, access_token: &str) -> PlaybackSnapshot {
        let recent = match self.api.recently_played(access_token).await {
            Ok(recent) => recent,
            Err(e) => {
                warning!("Recently played unavailable: {}", e);
                return PlaybackSnapshot::default();
            }
        };

        match recent.items.into_iter().next() {
            Some(entry) => PlaybackSnapshot {
                track: entry.track.map(Track::from),
                played_at: entry.played_at,
                ..PlaybackSnapshot::default()
            },
            None => PlaybackSnapshot::default(),
        }
    }

    async fn apply_playback_state(&self, access_token: &str, snapshot: &mut PlaybackSnapshot) {
        let state = match self.api.playback_state(access_token).await {
            Ok(Some(state)) => state,
            Ok(None) => return,
            Err(e) => {
                warning!("Playback state unavailable: {}", e);
                return;
            }
        };

        snapshot.shuffle_state = state.shuffle_state.unwrap_or(false);
        snapshot.repeat_state = state
            .repeat_state
            .as_deref()
            .map(RepeatState::parse)
            .unwrap_or_default();
        snapshot.device = state.device.map(Into::into);
    }
}
