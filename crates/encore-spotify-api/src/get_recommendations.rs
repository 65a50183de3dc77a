use crate::client::SpotifyClient;
use crate::ids::TrackId;
use crate::paging::check_limit;
use crate::track::Track;
use eyre::eyre;
use serde::Deserialize;
use serde::Serialize;
use tracing::debug;

pub const MAX_SEEDS: usize = 5;
pub const MAX_RECOMMENDATIONS: u32 = 100;

#[derive(Debug, Deserialize)]
struct RecommendationsResponse {
    tracks: Vec<Track>,
}

/// The slice of a recommended track that playlist building needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub name: String,
    pub id: TrackId,
    pub artist: Option<String>,
}

impl Recommendation {
    pub fn uri(&self) -> String {
        self.id.uri()
    }
}

impl SpotifyClient {
    /// https://developer.spotify.com/documentation/web-api/reference/get-recommendations
    pub async fn get_recommendations(
        &self,
        seed_tracks: &[TrackId],
        limit: u32,
    ) -> eyre::Result<Vec<Recommendation>> {
        if seed_tracks.is_empty() || seed_tracks.len() > MAX_SEEDS {
            return Err(eyre!(
                "between 1 and {} seed tracks are required, got {}",
                MAX_SEEDS,
                seed_tracks.len()
            ));
        }
        let limit = check_limit(limit, MAX_RECOMMENDATIONS)?;
        let seeds = seed_tracks
            .iter()
            .map(|id| id.0.as_str())
            .collect::<Vec<_>>()
            .join(",");
        let url = self.endpoint(&format!(
            "/recommendations?seed_tracks={}&limit={}",
            seeds, limit
        ));
        let res: RecommendationsResponse = self.fetch(&url).await?;
        debug!("Got {} recommendations for {}", res.tracks.len(), seeds);

        Ok(res
            .tracks
            .into_iter()
            .filter_map(|track| {
                let artist = track.primary_artist().map(str::to_string);
                // Local files have no id and cannot be added to a playlist.
                track.id.map(|id| Recommendation {
                    name: track.name,
                    id: TrackId(id),
                    artist,
                })
            })
            .collect())
    }
}
