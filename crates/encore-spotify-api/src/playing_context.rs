use crate::client::SpotifyClient;
use crate::get_album_tracks::MAX_ALBUM_PAGE;
use crate::get_playlist_tracks::MAX_PLAYLIST_PAGE;
use crate::ids::AlbumId;
use crate::ids::PlaylistId;
use crate::playback::ContextKind;
use crate::playback::CurrentlyPlaying;
use eyre::OptionExt;
use serde::Deserialize;
use serde::Serialize;
use tracing::info;
use tracing::warn;

/// Enough of the player state to put it back later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackSnapshot {
    pub item: SnapshotItem,
    pub progress_ms: Option<i64>,
    pub is_playing: bool,
    pub context: Option<SnapshotContext>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotItem {
    pub uri: String,
    pub duration_ms: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotContext {
    #[serde(rename = "type")]
    pub kind: ContextKind,
    pub uri: String,
    /// Position of the item inside the album or playlist.
    pub offset: Option<usize>,
}

impl PlaybackSnapshot {
    /// `listing` is the context's item URIs, when the context has a listing.
    pub fn from_playing(playing: &CurrentlyPlaying, listing: Option<&[String]>) -> eyre::Result<Self> {
        let item = playing.item.as_ref().ok_or_eyre("Player reported no item")?;
        let context = playing.context.as_ref().map(|ctx| {
            let offset = listing.and_then(|uris| uris.iter().position(|uri| uri == item.uri()));
            if listing.is_some() && offset.is_none() {
                warn!("{} not found in {}", item.uri(), ctx.uri);
            }
            SnapshotContext {
                kind: ctx.kind.clone(),
                uri: ctx.uri.clone(),
                offset,
            }
        });
        Ok(Self {
            item: SnapshotItem {
                uri: item.uri().to_string(),
                duration_ms: item.duration_ms(),
            },
            progress_ms: playing.progress_ms,
            is_playing: playing.is_playing,
            context,
        })
    }
}

impl SpotifyClient {
    /// Wait for something to play, then capture it together with its offset
    /// inside the album or playlist being played.
    pub async fn get_playing_with_context(
        &self,
        market: Option<&str>,
    ) -> eyre::Result<Option<PlaybackSnapshot>> {
        let market = market.unwrap_or(&self.market).to_string();
        let Some(playing) = self
            .poll_playing(&market, |p| p.is_some_and(|p| p.item.is_some()))
            .await?
        else {
            info!("Nothing started playing");
            return Ok(None);
        };

        let listing = match &playing.context {
            Some(ctx) if ctx.kind == ContextKind::Album => Some(
                self.get_album_track_uris(
                    &AlbumId::from_uri_or_id(&ctx.uri),
                    Some(market.as_str()),
                    MAX_ALBUM_PAGE,
                )
                .await?,
            ),
            Some(ctx) if ctx.kind == ContextKind::Playlist => Some(
                self.get_playlist_track_uris(
                    &PlaylistId::from_uri_or_id(&ctx.uri),
                    Some(market.as_str()),
                    MAX_PLAYLIST_PAGE,
                )
                .await?,
            ),
            _ => None,
        };

        PlaybackSnapshot::from_playing(&playing, listing.as_deref()).map(Some)
    }
}
