use crate::client::SpotifyClient;
use crate::playback::CurrentlyPlaying;
use reqwest::StatusCode;
use tracing::info;
use tracing::warn;

impl SpotifyClient {
    /// https://developer.spotify.com/documentation/web-api/reference/get-the-users-currently-playing-track
    ///
    /// `None` when nothing is playing.
    pub async fn get_playing(&self, market: Option<&str>) -> eyre::Result<Option<CurrentlyPlaying>> {
        let market = market.unwrap_or(&self.market);
        let url = self.endpoint(&format!(
            "/me/player/currently-playing?market={}&additional_types=track,episode",
            market
        ));
        let (status, playing) = self.fetch_optional::<CurrentlyPlaying>(&url).await?;
        match status {
            StatusCode::OK => Ok(playing),
            StatusCode::NO_CONTENT => {
                info!("Nothing playing");
                Ok(None)
            }
            other => {
                warn!("Unexpected status from currently-playing: {}", other);
                Ok(None)
            }
        }
    }
}
