use crate::client::SpotifyClient;
use crate::playlist::NewPlaylist;
use crate::playlist::Playlist;
use tracing::info;

impl SpotifyClient {
    /// https://developer.spotify.com/documentation/web-api/reference/create-playlist
    pub async fn create_playlist(&self, playlist: &NewPlaylist) -> eyre::Result<Playlist> {
        let user_id = self.resolve_user_id().await?;
        let url = self.endpoint(&format!("/users/{}/playlists", user_id));
        let created: Playlist = self.post_json(&url, playlist).await?;
        info!("Created playlist {:?} ({})", created.name, created.id);
        Ok(created)
    }
}
