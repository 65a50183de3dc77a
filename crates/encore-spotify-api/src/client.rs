use crate::bearer_token::BearerToken;
use crate::ids::UserId;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.spotify.com/v1";

/// ISO 3166-1 alpha-2 code, or `from_token` to use the account's country.
pub const DEFAULT_MARKET: &str = "DE";

/// How long to wait for the player to report a change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    pub attempts: u32,
    pub interval: Duration,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            attempts: 10,
            interval: Duration::from_millis(500),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SpotifyClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) bearer: BearerToken,
    pub(crate) user_id: Option<UserId>,
    pub(crate) market: String,
    pub(crate) poll: PollPolicy,
}

impl SpotifyClient {
    pub fn new(bearer: BearerToken) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            bearer,
            user_id: None,
            market: DEFAULT_MARKET.to_string(),
            poll: PollPolicy::default(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_user_id(mut self, user_id: UserId) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub fn with_market(mut self, market: impl Into<String>) -> Self {
        self.market = market.into();
        self
    }

    pub fn with_poll_policy(mut self, poll: PollPolicy) -> Self {
        self.poll = poll;
        self
    }

    pub fn market(&self) -> &str {
        &self.market
    }

    pub fn user_id(&self) -> Option<&UserId> {
        self.user_id.as_ref()
    }

    pub fn poll_policy(&self) -> PollPolicy {
        self.poll
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
