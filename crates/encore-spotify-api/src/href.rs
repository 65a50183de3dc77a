use serde::Deserialize;
use serde::Serialize;

/// An absolute API URL handed back by Spotify, such as a page's `next` cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct Href(pub http::Uri);

impl Href {
    pub fn as_string(&self) -> String {
        self.0.to_string()
    }
}

impl std::fmt::Display for Href {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for Href {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let href = String::deserialize(deserializer)?;
        let href = http::Uri::try_from(&href).map_err(serde::de::Error::custom)?;
        if href.scheme().is_none() {
            return Err(serde::de::Error::custom(format!(
                "expected an absolute URL, got {href}"
            )));
        }
        Ok(Href(href))
    }
}

impl Serialize for Href {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::Href;

    #[derive(serde::Deserialize)]
    struct Cursor {
        next: Option<Href>,
    }

    #[test]
    fn null_next_is_none() {
        let cursor: Cursor = serde_json::from_str(r#"{"next": null}"#).unwrap();
        assert!(cursor.next.is_none());
    }

    #[test]
    fn next_keeps_query() {
        let cursor: Cursor = serde_json::from_str(
            r#"{"next": "https://api.spotify.com/v1/albums/x/tracks?offset=50&limit=50"}"#,
        )
        .unwrap();
        assert_eq!(
            cursor.next.unwrap().as_string(),
            "https://api.spotify.com/v1/albums/x/tracks?offset=50&limit=50"
        );
    }

    #[test]
    fn relative_next_is_rejected() {
        assert!(serde_json::from_str::<Cursor>(r#"{"next": "/v1/albums"}"#).is_err());
    }
}
