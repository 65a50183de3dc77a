use crate::client::SpotifyClient;
use crate::href::Href;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

/// https://developer.spotify.com/documentation/web-api/concepts/api-calls#pagination
#[derive(Debug, Clone, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next: Option<Href>,
    #[serde(default)]
    pub total: Option<u64>,
}

impl SpotifyClient {
    /// Follow `next` from `first` until it is null, concatenating all items.
    pub(crate) async fn collect_pages<T>(&self, first: String) -> eyre::Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let mut items = Vec::new();
        let mut next = Some(first);
        let mut pages = 0usize;
        while let Some(url) = next {
            let page: Page<T> = self.fetch(&url).await?;
            pages += 1;
            debug!(
                "Page {} returned {} items (total {:?})",
                pages,
                page.items.len(),
                page.total
            );
            items.extend(page.items);
            next = page.next.map(|href| href.as_string());
        }
        Ok(items)
    }
}

/// Reject limits outside what an endpoint accepts before any request goes out.
pub(crate) fn check_limit(limit: u32, max: u32) -> eyre::Result<u32> {
    if (1..=max).contains(&limit) {
        Ok(limit)
    } else {
        Err(eyre::eyre!("limit must be between 1 and {}, got {}", max, limit))
    }
}
