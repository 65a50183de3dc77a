use crate::client::SpotifyClient;
use crate::ids::AlbumId;
use crate::paging::check_limit;
use serde::Deserialize;
use tracing::debug;

pub const MAX_ALBUM_PAGE: u32 = 50;

#[derive(Debug, Deserialize)]
struct AlbumTrackItem {
    uri: String,
}

impl SpotifyClient {
    /// https://developer.spotify.com/documentation/web-api/reference/get-an-albums-tracks
    ///
    /// Every track URI of the album in album order.
    pub async fn get_album_track_uris(
        &self,
        album: &AlbumId,
        market: Option<&str>,
        limit: u32,
    ) -> eyre::Result<Vec<String>> {
        let limit = check_limit(limit, MAX_ALBUM_PAGE)?;
        let market = market.unwrap_or(&self.market);
        let first = self.endpoint(&format!(
            "/albums/{}/tracks?market={}&limit={}",
            album, market, limit
        ));
        let items: Vec<AlbumTrackItem> = self.collect_pages(first).await?;
        debug!("Album {} has {} tracks", album, items.len());
        Ok(items.into_iter().map(|item| item.uri).collect())
    }
}
