use crate::client::SpotifyClient;
use crate::playback::CurrentlyPlaying;
use tracing::debug;

impl SpotifyClient {
    /// Sleep-then-read up to `poll.attempts` times until `ready` accepts the
    /// player state. `None` once the attempts run out.
    pub(crate) async fn poll_playing<F>(
        &self,
        market: &str,
        ready: F,
    ) -> eyre::Result<Option<CurrentlyPlaying>>
    where
        F: Fn(Option<&CurrentlyPlaying>) -> bool,
    {
        for attempt in 1..=self.poll.attempts {
            tokio::time::sleep(self.poll.interval).await;
            let playing = self.get_playing(Some(market)).await?;
            if ready(playing.as_ref()) {
                return Ok(playing);
            }
            debug!("Player not ready, attempt {}/{}", attempt, self.poll.attempts);
        }
        Ok(None)
    }
}
