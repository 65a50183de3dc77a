use crate::client::SpotifyClient;
use crate::ids::UserId;
use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

impl SpotifyClient {
    /// https://developer.spotify.com/documentation/web-api/reference/get-current-users-profile
    pub async fn get_current_user(&self) -> eyre::Result<User> {
        let url = self.endpoint("/me");
        self.fetch(&url).await
    }

    /// The configured user, or the token's owner when none was given.
    pub async fn resolve_user_id(&self) -> eyre::Result<UserId> {
        match &self.user_id {
            Some(id) => Ok(id.clone()),
            None => Ok(UserId(self.get_current_user().await?.id)),
        }
    }
}
