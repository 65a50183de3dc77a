mod cli;

use clap::Parser;
use cli::Cli;
use encore_init::init;
use encore_spotify_api::auth::pkce::get_bearer_token_via_pkce;
use encore_spotify_api::bearer_token::BearerToken;
use encore_spotify_api::client::SpotifyClient;
use encore_spotify_api::ids::UserId;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    init()?;
    let cli = Cli::parse();

    let bearer = match cli.token {
        Some(token) => BearerToken(token),
        None => get_bearer_token_via_pkce().await?,
    };

    let mut client = SpotifyClient::new(bearer)
        .with_base_url(cli.base_url)
        .with_market(cli.market);
    if let Some(user_id) = cli.user_id {
        client = client.with_user_id(UserId(user_id));
    }

    cli::run(cli.command, &client).await
}
