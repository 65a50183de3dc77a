use crate::track::Episode;
use crate::track::Track;
use serde::Deserialize;
use serde::Serialize;

/// https://developer.spotify.com/documentation/web-api/reference/get-the-users-currently-playing-track
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentlyPlaying {
    pub context: Option<PlaybackContext>,
    pub progress_ms: Option<i64>,
    pub is_playing: bool,
    pub item: Option<PlayingItem>,
    #[serde(default)]
    pub currently_playing_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackContext {
    #[serde(rename = "type")]
    pub kind: ContextKind,
    pub uri: String,
    #[serde(default)]
    pub href: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContextKind {
    Album,
    Playlist,
    Artist,
    Show,
    Collection,
    /// Any type this client has no special handling for, kept verbatim.
    Other(String),
}

impl ContextKind {
    pub fn as_str(&self) -> &str {
        match self {
            ContextKind::Album => "album",
            ContextKind::Playlist => "playlist",
            ContextKind::Artist => "artist",
            ContextKind::Show => "show",
            ContextKind::Collection => "collection",
            ContextKind::Other(kind) => kind,
        }
    }
}

impl From<String> for ContextKind {
    fn from(kind: String) -> Self {
        match kind.as_str() {
            "album" => ContextKind::Album,
            "playlist" => ContextKind::Playlist,
            "artist" => ContextKind::Artist,
            "show" => ContextKind::Show,
            "collection" => ContextKind::Collection,
            _ => ContextKind::Other(kind),
        }
    }
}

impl std::fmt::Display for ContextKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl<'de> Deserialize<'de> for ContextKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(ContextKind::from(String::deserialize(deserializer)?))
    }
}

impl Serialize for ContextKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PlayingItem {
    Track(Track),
    Episode(Episode),
}

impl PlayingItem {
    pub fn uri(&self) -> &str {
        match self {
            PlayingItem::Track(t) => &t.uri,
            PlayingItem::Episode(e) => &e.uri,
        }
    }

    pub fn duration_ms(&self) -> i64 {
        match self {
            PlayingItem::Track(t) => t.duration_ms,
            PlayingItem::Episode(e) => e.duration_ms,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            PlayingItem::Track(t) => &t.name,
            PlayingItem::Episode(e) => &e.name,
        }
    }
}

impl CurrentlyPlaying {
    pub fn item_uri(&self) -> Option<&str> {
        self.item.as_ref().map(PlayingItem::uri)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_track_in_playlist_context() {
        let json = r#"{
            "context": {"type": "playlist", "uri": "spotify:playlist:37i9dQZF1DXcBWIGoYBM5M", "href": "https://api.spotify.com/v1/playlists/37i9dQZF1DXcBWIGoYBM5M"},
            "progress_ms": 1234,
            "is_playing": true,
            "currently_playing_type": "track",
            "item": {
                "type": "track",
                "id": "4uLU6hMCjMI75M1A2tKUQC",
                "name": "Never Gonna Give You Up",
                "uri": "spotify:track:4uLU6hMCjMI75M1A2tKUQC",
                "duration_ms": 213573,
                "artists": [{"id": "0gxyHStUsqpMadRV0Di1Qt", "name": "Rick Astley", "uri": "spotify:artist:0gxyHStUsqpMadRV0Di1Qt"}]
            }
        }"#;
        let playing: CurrentlyPlaying = serde_json::from_str(json).unwrap();
        assert_eq!(playing.context.as_ref().unwrap().kind, ContextKind::Playlist);
        assert_eq!(playing.item_uri(), Some("spotify:track:4uLU6hMCjMI75M1A2tKUQC"));
        assert_eq!(playing.item.unwrap().duration_ms(), 213573);
    }

    #[test]
    fn decodes_episode_without_context() {
        let json = r#"{
            "context": null,
            "progress_ms": 0,
            "is_playing": false,
            "item": {"type": "episode", "id": "512ojhOuo1ktJprKbVcKyQ", "name": "Ep", "uri": "spotify:episode:512ojhOuo1ktJprKbVcKyQ", "duration_ms": 1000}
        }"#;
        let playing: CurrentlyPlaying = serde_json::from_str(json).unwrap();
        assert!(playing.context.is_none());
        assert!(matches!(playing.item, Some(PlayingItem::Episode(_))));
    }

    #[test]
    fn unknown_context_type_is_kept_verbatim() {
        let ctx: PlaybackContext =
            serde_json::from_str(r#"{"type": "audiobook", "uri": "spotify:audiobook:x"}"#).unwrap();
        assert_eq!(ctx.kind, ContextKind::Other("audiobook".into()));
        let json = serde_json::to_value(&ctx).unwrap();
        assert_eq!(json["type"], "audiobook");
    }
}
