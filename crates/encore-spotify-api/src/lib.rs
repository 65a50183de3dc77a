pub mod add_tracks_to_playlist;
pub mod bearer_token;
pub mod client;
pub mod create_playlist;
pub mod fetch;
pub mod get_album_tracks;
pub mod get_currently_playing;
pub mod get_playlist_tracks;
pub mod get_recommendations;
pub mod href;
pub mod ids;
pub mod paging;
pub mod playback;
pub mod player;
pub mod playing_context;
pub mod playlist;
pub mod poll;
pub mod track;
pub mod user;
pub mod auth {
    pub mod pkce;
    pub mod token_cache;
}
