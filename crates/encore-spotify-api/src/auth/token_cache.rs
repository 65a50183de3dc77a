use crate::bearer_token::BearerToken;
use eyre::Result;
use serde::Deserialize;
use serde::Serialize;
use std::path::Path;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;
use tracing::debug;

pub const BEARER_TOKEN_FILE: &str = "bearer_token.json";

/// Refresh this many seconds before Spotify would reject the token.
const EXPIRY_MARGIN_SECS: u64 = 60;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedToken {
    pub access_token: BearerToken,
    pub refresh_token: Option<String>,
    /// Unix seconds.
    pub expires_at: u64,
}

impl CachedToken {
    pub fn new(access_token: String, refresh_token: Option<String>, expires_in: u64) -> Self {
        Self {
            access_token: BearerToken(access_token),
            refresh_token,
            expires_at: now_secs() + expires_in,
        }
    }

    pub fn is_expired_at(&self, now: u64) -> bool {
        now + EXPIRY_MARGIN_SECS >= self.expires_at
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(now_secs())
    }
}

pub fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

pub async fn get_saved_token(path: impl AsRef<Path>) -> Result<Option<CachedToken>> {
    if let Ok(token) = tokio::fs::read(path.as_ref()).await {
        let token = serde_json::from_slice(&token)?;
        Ok(Some(token))
    } else {
        Ok(None)
    }
}

pub async fn save_token(path: impl AsRef<Path>, token: &CachedToken) -> Result<()> {
    tokio::fs::write(path.as_ref(), serde_json::to_string_pretty(token)?).await?;
    debug!("Saved token to {}", path.as_ref().display());
    Ok(())
}
