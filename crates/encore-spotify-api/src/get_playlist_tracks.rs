use crate::client::SpotifyClient;
use crate::ids::PlaylistId;
use crate::paging::check_limit;
use serde::Deserialize;
use tracing::debug;

pub const MAX_PLAYLIST_PAGE: u32 = 100;

#[derive(Debug, Deserialize)]
struct PlaylistItem {
    track: Option<PlaylistItemTrack>,
}

#[derive(Debug, Deserialize)]
struct PlaylistItemTrack {
    uri: String,
}

impl SpotifyClient {
    /// https://developer.spotify.com/documentation/web-api/reference/get-playlists-tracks
    ///
    /// Item URIs (tracks and episodes) in playlist order. Removed items, which
    /// come back with a null `track`, are dropped.
    pub async fn get_playlist_track_uris(
        &self,
        playlist: &PlaylistId,
        market: Option<&str>,
        limit: u32,
    ) -> eyre::Result<Vec<String>> {
        let limit = check_limit(limit, MAX_PLAYLIST_PAGE)?;
        let market = market.unwrap_or(&self.market);
        let first = self.endpoint(&format!(
            "/playlists/{}/tracks?market={}&fields=items(track(uri)),next&limit={}&additional_types=track,episode",
            playlist, market, limit
        ));
        let items: Vec<PlaylistItem> = self.collect_pages(first).await?;
        let total = items.len();
        let uris: Vec<String> = items
            .into_iter()
            .filter_map(|item| item.track.map(|t| t.uri))
            .collect();
        debug!(
            "Playlist {} has {} items ({} unavailable)",
            playlist,
            uris.len(),
            total - uris.len()
        );
        Ok(uris)
    }
}
