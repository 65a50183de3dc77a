use crate::client::SpotifyClient;
use crate::playback::ContextKind;
use crate::playback::CurrentlyPlaying;
use crate::playing_context::PlaybackSnapshot;
use eyre::bail;
use reqwest::Method;
use reqwest::StatusCode;
use serde::Serialize;
use tracing::debug;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Next,
    Previous,
}

impl Direction {
    fn path(self) -> &'static str {
        match self {
            Direction::Next => "/me/player/next",
            Direction::Previous => "/me/player/previous",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Next => write!(f, "next"),
            Direction::Previous => write!(f, "previous"),
        }
    }
}

#[derive(Debug, Serialize, PartialEq)]
struct StartPlayback {
    #[serde(skip_serializing_if = "Option::is_none")]
    context_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    uris: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    offset: Option<Offset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    position_ms: Option<i64>,
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(untagged)]
enum Offset {
    Position { position: usize },
    Uri { uri: String },
}

impl StartPlayback {
    fn for_snapshot(snapshot: &PlaybackSnapshot) -> Self {
        let position_ms = snapshot.progress_ms;
        match &snapshot.context {
            Some(ctx) if matches!(ctx.kind, ContextKind::Album | ContextKind::Playlist) => {
                let offset = match ctx.offset {
                    Some(position) => Offset::Position { position },
                    None => Offset::Uri {
                        uri: snapshot.item.uri.clone(),
                    },
                };
                Self {
                    context_uri: Some(ctx.uri.clone()),
                    uris: None,
                    offset: Some(offset),
                    position_ms,
                }
            }
            _ => Self {
                context_uri: None,
                uris: Some(vec![snapshot.item.uri.clone()]),
                offset: None,
                position_ms,
            },
        }
    }
}

impl SpotifyClient {
    /// Move `tracks` items forward (positive) or back (negative), waiting
    /// after every command until the player reports a different item.
    ///
    /// Spotify restarts the current item instead of going back when it is a
    /// few seconds in. The URI then never changes, so `skip(-1)` fails with
    /// "did not move" even though the command itself was accepted. A player
    /// that stops mid-skip fails the same way.
    ///
    /// https://developer.spotify.com/documentation/web-api/reference/skip-users-playback-to-next-track
    pub async fn skip(&self, tracks: i64) -> eyre::Result<()> {
        if tracks == 0 {
            return Ok(());
        }

        let Some(mut current) = self
            .get_playing(None)
            .await?
            .and_then(|p| p.item_uri().map(str::to_string))
        else {
            info!("Nothing playing, not skipping");
            return Ok(());
        };

        let direction = if tracks > 0 {
            Direction::Next
        } else {
            Direction::Previous
        };
        let url = self.endpoint(direction.path());
        let market = self.market.clone();

        for step in 1..=tracks.unsigned_abs() {
            let status = self.command(Method::POST, &url, None::<&()>).await?;
            if status != StatusCode::NO_CONTENT {
                bail!("Skipping to {} returned {}, expected 204", direction, status);
            }

            let before = current.clone();
            let moved = self
                .poll_playing(&market, |p| {
                    p.and_then(CurrentlyPlaying::item_uri)
                        .is_some_and(|uri| uri != before.as_str())
                })
                .await?;
            current = match moved.as_ref().and_then(CurrentlyPlaying::item_uri) {
                Some(uri) => uri.to_string(),
                None => bail!(
                    "Player did not move to the {} item after step {} of {}",
                    direction,
                    step,
                    tracks.unsigned_abs()
                ),
            };
            debug!("Step {}: {} -> {}", step, before, current);
        }
        Ok(())
    }

    /// Put the player back where `snapshot` was taken.
    ///
    /// https://developer.spotify.com/documentation/web-api/reference/start-a-users-playback
    pub async fn resume(&self, snapshot: &PlaybackSnapshot) -> eyre::Result<()> {
        let body = StartPlayback::for_snapshot(snapshot);
        let url = self.endpoint("/me/player/play");
        let status = self.command(Method::PUT, &url, Some(&body)).await?;
        if status != StatusCode::NO_CONTENT {
            bail!("Starting playback returned {}, expected 204", status);
        }

        if !snapshot.is_playing {
            let url = self.endpoint("/me/player/pause");
            let status = self.command(Method::PUT, &url, None::<&()>).await?;
            if status != StatusCode::NO_CONTENT {
                bail!("Pausing playback returned {}, expected 204", status);
            }
        }
        info!("Resumed {}", snapshot.item.uri);
        Ok(())
    }
}
