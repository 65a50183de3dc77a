use clap::Parser;
use clap::Subcommand;
use encore_spotify_api::client::DEFAULT_BASE_URL;
use encore_spotify_api::client::DEFAULT_MARKET;
use encore_spotify_api::client::SpotifyClient;
use encore_spotify_api::get_album_tracks::MAX_ALBUM_PAGE;
use encore_spotify_api::get_playlist_tracks::MAX_PLAYLIST_PAGE;
use encore_spotify_api::ids::AlbumId;
use encore_spotify_api::ids::PlaylistId;
use encore_spotify_api::ids::TrackId;
use encore_spotify_api::playing_context::PlaybackSnapshot;
use encore_spotify_api::playlist::NewPlaylist;
use eyre::WrapErr;
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "encore", version, about = "Small automations on top of the Spotify Web API")]
pub struct Cli {
    /// Skip the browser login and use this access token.
    #[arg(long, env = "SPOTIFY_AUTHORIZATION_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Needed to create playlists; looked up from the token when missing.
    #[arg(long, env = "SPOTIFY_USER_ID")]
    pub user_id: Option<String>,

    #[arg(long, env = "SPOTIFY_MARKET", default_value = DEFAULT_MARKET)]
    pub market: String,

    #[arg(long, env = "SPOTIFY_API_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the raw currently-playing state.
    Playing,
    /// Wait for playback and print where it is, including the album/playlist offset.
    Snapshot,
    /// Restore a snapshot previously printed by `snapshot`.
    Resume { file: PathBuf },
    /// Skip forward (positive) or back (negative).
    Skip {
        #[arg(allow_negative_numbers = true)]
        tracks: i64,
    },
    /// List the track URIs of an album.
    AlbumTracks {
        album: String,
        #[arg(long, default_value_t = MAX_ALBUM_PAGE)]
        limit: u32,
    },
    /// List the item URIs of a playlist.
    PlaylistTracks {
        playlist: String,
        #[arg(long, default_value_t = MAX_PLAYLIST_PAGE)]
        limit: u32,
    },
    /// Recommendations seeded by up to five tracks.
    Recommend {
        #[arg(required = true, num_args = 1..=5)]
        seeds: Vec<String>,
        #[arg(long, default_value_t = 50)]
        limit: u32,
    },
    CreatePlaylist {
        name: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        private: bool,
    },
    /// Recommend, create a playlist and fill it in one go.
    RecommendPlaylist {
        name: String,
        #[arg(required = true, num_args = 1..=5)]
        seeds: Vec<String>,
        #[arg(long, default_value_t = 50)]
        limit: u32,
    },
}

fn print_json<T: Serialize>(value: &T) -> eyre::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn seed_ids(seeds: &[String]) -> Vec<TrackId> {
    seeds.iter().map(|s| TrackId::from_uri_or_id(s)).collect()
}

pub async fn run(command: Command, client: &SpotifyClient) -> eyre::Result<()> {
    match command {
        Command::Playing => print_json(&client.get_playing(None).await?),
        Command::Snapshot => print_json(&client.get_playing_with_context(None).await?),
        Command::Resume { file } => {
            let raw = tokio::fs::read(&file)
                .await
                .wrap_err_with(|| format!("Reading {}", file.display()))?;
            let snapshot: PlaybackSnapshot = serde_json::from_slice(&raw)?;
            client.resume(&snapshot).await
        }
        Command::Skip { tracks } => client.skip(tracks).await,
        Command::AlbumTracks { album, limit } => {
            let album = AlbumId::from_uri_or_id(&album);
            print_json(&client.get_album_track_uris(&album, None, limit).await?)
        }
        Command::PlaylistTracks { playlist, limit } => {
            let playlist = PlaylistId::from_uri_or_id(&playlist);
            print_json(&client.get_playlist_track_uris(&playlist, None, limit).await?)
        }
        Command::Recommend { seeds, limit } => {
            print_json(&client.get_recommendations(&seed_ids(&seeds), limit).await?)
        }
        Command::CreatePlaylist {
            name,
            description,
            private,
        } => {
            let mut new = NewPlaylist::named(name);
            if let Some(description) = description {
                new.description = description;
            }
            new.public = !private;
            print_json(&client.create_playlist(&new).await?)
        }
        Command::RecommendPlaylist { name, seeds, limit } => {
            let tracks = client.get_recommendations(&seed_ids(&seeds), limit).await?;
            let playlist = client.create_playlist(&NewPlaylist::named(name)).await?;
            let uris: Vec<String> = tracks.iter().map(|t| t.uri()).collect();
            client
                .add_tracks_to_playlist(&PlaylistId(playlist.id.clone()), &uris)
                .await?;
            info!("Added {} tracks to {}", uris.len(), playlist.uri);
            print_json(&playlist)
        }
    }
}
