use crate::client::SpotifyClient;
use crate::ids::PlaylistId;
use crate::playlist::Snapshot;
use serde::Serialize;
use tracing::debug;

/// Per-request ceiling on the add-items endpoint.
pub const MAX_URIS_PER_REQUEST: usize = 100;

#[derive(Serialize)]
struct AddItems<'a> {
    uris: &'a [String],
}

impl SpotifyClient {
    /// https://developer.spotify.com/documentation/web-api/reference/add-tracks-to-playlist
    ///
    /// Appends in order, chunked to the request ceiling. Returns the snapshot
    /// id after the last chunk, or `None` if `uris` was empty.
    pub async fn add_tracks_to_playlist(
        &self,
        playlist: &PlaylistId,
        uris: &[String],
    ) -> eyre::Result<Option<String>> {
        let url = self.endpoint(&format!("/playlists/{}/tracks", playlist));
        let mut snapshot = None;
        for chunk in uris.chunks(MAX_URIS_PER_REQUEST) {
            debug!("Adding {} items to {}", chunk.len(), playlist);
            let res: Snapshot = self.post_json(&url, &AddItems { uris: chunk }).await?;
            snapshot = Some(res.snapshot_id);
        }
        Ok(snapshot)
    }
}
