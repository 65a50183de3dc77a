use regex::Regex;
use serde::Deserialize;
use serde::Serialize;
use std::ops::Deref;
use std::sync::LazyLock;

/// `spotify:<kind>:<id>` or the legacy `spotify:user:<user>:<kind>:<id>`.
static SPOTIFY_URI: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^spotify:(?:.*:)?([a-z]+):([0-9A-Za-z_-]{22})$").expect("static regex")
});

/// Remove the `spotify:<kind>:` prefix from `input`.
///
/// Only strips when the remainder is a 22 character base62 id of the given
/// kind. Anything else, including a bare id, comes back unchanged.
pub fn strip_uri<'a>(kind: &str, input: &'a str) -> &'a str {
    match SPOTIFY_URI.captures(input) {
        Some(caps) if &caps[1] == kind => caps.get(2).map_or(input, |id| id.as_str()),
        _ => input,
    }
}

macro_rules! spotify_id {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub String);

        impl $name {
            pub const KIND: &'static str = $kind;

            /// Accepts either a bare id or a `spotify:` URI of this kind.
            pub fn from_uri_or_id(input: &str) -> Self {
                $name(strip_uri(Self::KIND, input.trim()).to_string())
            }

            pub fn uri(&self) -> String {
                format!("spotify:{}:{}", Self::KIND, self.0)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl Deref for $name {
            type Target = str;
            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

spotify_id!(AlbumId, "album");
spotify_id!(PlaylistId, "playlist");
spotify_id!(TrackId, "track");

/// User ids are free-form, so no URI validation applies.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);
impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
