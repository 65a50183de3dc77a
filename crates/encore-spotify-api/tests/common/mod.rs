#![allow(dead_code)]

use encore_spotify_api::bearer_token::BearerToken;
use encore_spotify_api::client::PollPolicy;
use encore_spotify_api::client::SpotifyClient;
use serde_json::Value;
use serde_json::json;
use std::time::Duration;

pub const TOKEN: &str = "test-token";
pub const ALBUM_ID: &str = "0evSqptUFUbxZjrtgSwZAq";
pub const PLAYLIST_ID: &str = "37i9dQZF1DXcBWIGoYBM5M";

pub fn client(server: &mockito::ServerGuard) -> SpotifyClient {
    SpotifyClient::new(BearerToken::new(TOKEN))
        .with_base_url(format!("{}/v1", server.url()))
        .with_poll_policy(PollPolicy {
            attempts: 3,
            interval: Duration::ZERO,
        })
}

pub fn bearer() -> String {
    format!("Bearer {}", TOKEN)
}

pub fn track_uri(n: usize) -> String {
    format!("spotify:track:{:0>22}", n)
}

pub fn playing(item_uri: &str, context: Option<(&str, &str)>) -> Value {
    json!({
        "context": context.map(|(kind, uri)| json!({"type": kind, "uri": uri})),
        "progress_ms": 30_000,
        "is_playing": true,
        "currently_playing_type": "track",
        "item": {
            "type": "track",
            "id": item_uri.trim_start_matches("spotify:track:"),
            "name": "Some Song",
            "uri": item_uri,
            "duration_ms": 200_000,
            "artists": [{"id": "0gxyHStUsqpMadRV0Di1Qt", "name": "Some Artist", "uri": "spotify:artist:0gxyHStUsqpMadRV0Di1Qt"}]
        }
    })
}
