mod common;

use common::bearer;
use common::client;
use common::track_uri;
use encore_spotify_api::ids::PlaylistId;
use encore_spotify_api::ids::TrackId;
use encore_spotify_api::ids::UserId;
use encore_spotify_api::playback::ContextKind;
use encore_spotify_api::playing_context::PlaybackSnapshot;
use encore_spotify_api::playing_context::SnapshotContext;
use encore_spotify_api::playing_context::SnapshotItem;
use encore_spotify_api::playlist::NewPlaylist;
use mockito::Matcher;
use serde_json::json;

const NEW_PLAYLIST_ID: &str = "7d2D2S200NyUE5KYs80PwO";

fn created_playlist() -> String {
    json!({
        "id": NEW_PLAYLIST_ID,
        "name": "Weekend",
        "uri": format!("spotify:playlist:{}", NEW_PLAYLIST_ID),
        "description": "Recommended songs",
        "public": true,
        "snapshot_id": "MSw5OGE4"
    })
    .to_string()
}

#[tokio::test]
async fn recommendations_join_seeds_and_keep_first_artist() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/recommendations")
        .match_header("authorization", bearer().as_str())
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("seed_tracks".into(), "0c6xIDDpzE81m2q797ordA,4NHQUGzhtTLFvgF5SZesLK".into()),
            Matcher::UrlEncoded("limit".into(), "2".into()),
        ]))
        .with_status(200)
        .with_body(
            json!({
                "seeds": [],
                "tracks": [
                    {
                        "id": "6rqhFgbbKwnb9MLmUQDhG6",
                        "name": "Speak to Me",
                        "uri": "spotify:track:6rqhFgbbKwnb9MLmUQDhG6",
                        "duration_ms": 90_000,
                        "artists": [{"name": "Pink Floyd"}, {"name": "Someone Else"}]
                    },
                    {
                        "id": null,
                        "name": "Local Demo",
                        "uri": "spotify:local:::demo:120",
                        "duration_ms": 120_000,
                        "artists": [],
                        "is_local": true
                    }
                ]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let seeds = vec![
        TrackId::from_uri_or_id("spotify:track:0c6xIDDpzE81m2q797ordA"),
        TrackId::from_uri_or_id("4NHQUGzhtTLFvgF5SZesLK"),
    ];
    let recs = client(&server).get_recommendations(&seeds, 2).await.unwrap();

    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].name, "Speak to Me");
    assert_eq!(recs[0].artist.as_deref(), Some("Pink Floyd"));
    assert_eq!(recs[0].uri(), "spotify:track:6rqhFgbbKwnb9MLmUQDhG6");
    mock.assert_async().await;
}

#[tokio::test]
async fn recommendations_need_one_to_five_seeds() {
    let server = mockito::Server::new_async().await;
    let client = client(&server);

    assert!(client.get_recommendations(&[], 10).await.is_err());
    let six: Vec<TrackId> = (0..6).map(|n| TrackId(format!("{:0>22}", n))).collect();
    assert!(client.get_recommendations(&six, 10).await.is_err());
}

#[tokio::test]
async fn create_playlist_posts_defaults_for_configured_user() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/users/someone/playlists")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "name": "Weekend",
            "description": "Recommended songs",
            "public": true
        })))
        .with_status(201)
        .with_body(created_playlist())
        .create_async()
        .await;

    let playlist = client(&server)
        .with_user_id(UserId("someone".into()))
        .create_playlist(&NewPlaylist::named("Weekend"))
        .await
        .unwrap();

    assert_eq!(playlist.id, NEW_PLAYLIST_ID);
    assert_eq!(playlist.name, "Weekend");
    mock.assert_async().await;
}

#[tokio::test]
async fn create_playlist_looks_up_user_when_unset() {
    let mut server = mockito::Server::new_async().await;
    let me = server
        .mock("GET", "/v1/me")
        .with_status(200)
        .with_body(json!({"id": "from-token", "display_name": "Me", "country": "DE"}).to_string())
        .create_async()
        .await;
    let create = server
        .mock("POST", "/v1/users/from-token/playlists")
        .with_status(201)
        .with_body(created_playlist())
        .create_async()
        .await;

    client(&server)
        .create_playlist(&NewPlaylist::named("Weekend"))
        .await
        .unwrap();

    me.assert_async().await;
    create.assert_async().await;
}

#[tokio::test]
async fn adding_tracks_is_chunked_by_hundred() {
    let mut server = mockito::Server::new_async().await;
    let uris: Vec<String> = (0..250).map(track_uri).collect();
    let path = format!("/v1/playlists/{}/tracks", NEW_PLAYLIST_ID);
    let all = server
        .mock("POST", path.as_str())
        .with_status(201)
        .with_body(r#"{"snapshot_id": "latest"}"#)
        .expect(3)
        .create_async()
        .await;

    let snapshot = client(&server)
        .add_tracks_to_playlist(&PlaylistId(NEW_PLAYLIST_ID.into()), &uris)
        .await
        .unwrap();

    assert_eq!(snapshot.as_deref(), Some("latest"));
    all.assert_async().await;
}

#[tokio::test]
async fn adding_no_tracks_sends_nothing() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let snapshot = client(&server)
        .add_tracks_to_playlist(&PlaylistId(NEW_PLAYLIST_ID.into()), &[])
        .await
        .unwrap();

    assert!(snapshot.is_none());
    mock.assert_async().await;
}

#[tokio::test]
async fn resume_restarts_context_and_pauses() {
    let mut server = mockito::Server::new_async().await;
    let play = server
        .mock("PUT", "/v1/me/player/play")
        .match_body(Matcher::Json(json!({
            "context_uri": "spotify:album:0evSqptUFUbxZjrtgSwZAq",
            "offset": {"position": 4},
            "position_ms": 12_345
        })))
        .with_status(204)
        .create_async()
        .await;
    let pause = server
        .mock("PUT", "/v1/me/player/pause")
        .with_status(204)
        .create_async()
        .await;

    let snapshot = PlaybackSnapshot {
        item: SnapshotItem {
            uri: track_uri(4),
            duration_ms: 200_000,
        },
        progress_ms: Some(12_345),
        is_playing: false,
        context: Some(SnapshotContext {
            kind: ContextKind::Album,
            uri: "spotify:album:0evSqptUFUbxZjrtgSwZAq".into(),
            offset: Some(4),
        }),
    };
    client(&server).resume(&snapshot).await.unwrap();

    play.assert_async().await;
    pause.assert_async().await;
}
