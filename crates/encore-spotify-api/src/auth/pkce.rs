use crate::auth::token_cache::BEARER_TOKEN_FILE;
use crate::auth::token_cache::CachedToken;
use crate::auth::token_cache::get_saved_token;
use crate::auth::token_cache::save_token;
use crate::bearer_token::BearerToken;
use base64::Engine;
use eyre::OptionExt;
use eyre::Result;
use eyre::eyre;
use open::that as open_browser;
use rand::Rng;
use rand::distr::Alphanumeric;
use serde::Deserialize;
use sha2::Digest;
use sha2::Sha256;
use tokio::io::AsyncReadExt;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpListener;
use tracing::debug;
use tracing::info;
use tracing::warn;
use url::Url;

const AUTHORIZE_URL: &str = "https://accounts.spotify.com/authorize";
const TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

/// Everything the playback, listing and playlist calls need.
pub const SCOPES: &str = "user-read-playback-state user-read-currently-playing user-modify-playback-state playlist-read-private playlist-modify-public playlist-modify-private";

/// Read the required environment variable or error
fn var(name: &str) -> Result<String> {
    std::env::var(name).map_err(|_| eyre!("Missing env var: {}", name))
}

/// Cached token if still valid, a refreshed one if it can be refreshed, or a
/// fresh one from the browser flow.
pub async fn get_bearer_token_via_pkce() -> Result<BearerToken> {
    debug!("Getting bearer token");
    dotenvy::dotenv().ok();

    let cached = cached_bearer_token(BEARER_TOKEN_FILE, || var("SPOTIFY_CLIENT_ID")).await?;
    if let Some(token) = cached {
        return Ok(token);
    }

    let client_id = var("SPOTIFY_CLIENT_ID")?;
    let token = authorize(&client_id).await?;
    save_token(BEARER_TOKEN_FILE, &token).await?;
    Ok(token.access_token)
}

/// The token stored at `path`, refreshed if it has expired.
///
/// `client_id` is only read when a refresh is needed.
async fn cached_bearer_token<F>(path: &str, client_id: F) -> Result<Option<BearerToken>>
where
    F: FnOnce() -> Result<String>,
{
    let Some(cached) = get_saved_token(path).await? else {
        return Ok(None);
    };
    if !cached.is_expired() {
        return Ok(Some(cached.access_token));
    }
    let Some(refresh) = cached.refresh_token.as_deref() else {
        return Ok(None);
    };
    match refresh_token(&client_id()?, refresh).await {
        Ok(token) => {
            save_token(path, &token).await?;
            Ok(Some(token.access_token))
        }
        Err(e) => {
            warn!("Token refresh failed, logging in again: {:?}", e);
            Ok(None)
        }
    }
}

async fn authorize(client_id: &str) -> Result<CachedToken> {
    let redirect_uri = var("SPOTIFY_REDIRECT_URI")?;
    let verifier = generate_code_verifier();
    let challenge = code_challenge(&verifier);

    let auth_url = Url::parse_with_params(
        AUTHORIZE_URL,
        &[
            ("client_id", client_id),
            ("response_type", "code"),
            ("redirect_uri", redirect_uri.as_str()),
            ("code_challenge_method", "S256"),
            ("code_challenge", challenge.as_str()),
            ("scope", SCOPES),
        ],
    )?;

    info!("Opening browser for auth");
    if let Err(e) = open_browser(auth_url.as_str()) {
        warn!("Could not open a browser ({}), visit {} manually", e, auth_url);
    }

    let code = listen_for_code(&redirect_uri).await?;

    let resp = reqwest::Client::new()
        .post(TOKEN_URL)
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code.as_str()),
            ("redirect_uri", redirect_uri.as_str()),
            ("client_id", client_id),
            ("code_verifier", verifier.as_str()),
        ])
        .send()
        .await?
        .error_for_status()?
        .json::<TokenResponse>()
        .await?;

    debug!("Access Token: len={}", resp.access_token.len());
    debug!("Scope: {}", resp.scope);
    debug!("Expires in: {}s", resp.expires_in);

    Ok(CachedToken::new(resp.access_token, resp.refresh_token, resp.expires_in))
}

/// https://developer.spotify.com/documentation/web-api/tutorials/refreshing-tokens
async fn refresh_token(client_id: &str, refresh_token: &str) -> Result<CachedToken> {
    info!("Refreshing access token");
    let resp = reqwest::Client::new()
        .post(TOKEN_URL)
        .form(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
            ("client_id", client_id),
        ])
        .send()
        .await?
        .error_for_status()?
        .json::<TokenResponse>()
        .await?;

    // Spotify may or may not rotate the refresh token.
    let refresh = resp.refresh_token.or_else(|| Some(refresh_token.to_string()));
    Ok(CachedToken::new(resp.access_token, refresh, resp.expires_in))
}

fn generate_code_verifier() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(128)
        .map(char::from)
        .collect()
}

fn code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(hash)
}

fn code_from_request(request: &str) -> Option<String> {
    request
        .split_whitespace()
        .nth(1)
        .and_then(|path| Url::parse(&format!("http://localhost{}", path)).ok())
        .and_then(|url| {
            url.query_pairs()
                .find(|(k, _)| k == "code")
                .map(|(_, v)| v.to_string())
        })
}

async fn listen_for_code(redirect_uri: &str) -> Result<String> {
    debug!("Listening for code on {}", redirect_uri);
    let redirect = Url::parse(redirect_uri)?;
    let host = redirect.host_str().ok_or_eyre("Invalid redirect URI")?;
    let port = redirect
        .port_or_known_default()
        .ok_or_eyre("Invalid redirect URI")?;
    let listener = TcpListener::bind((host, port)).await?;
    let (mut socket, _) = listener.accept().await?;

    let mut buffer = [0; 4096];
    let n = socket.read(&mut buffer).await?;
    let request = String::from_utf8_lossy(&buffer[..n]);

    let code = code_from_request(&request)
        .ok_or_else(|| eyre!("Failed to extract code from request"))?;

    let body = r#"
        <!DOCTYPE html>
        <html lang="en">
          <head><meta charset="UTF-8"><title>Spotify Auth</title></head>
          <body style="font-family:sans-serif;text-align:center;padding-top:3em">
            <h1>Encore</h1>
            <strong>Spotify auth complete.</strong><br/>You may close this window.
          </body>
        </html>
        "#;

    let response = format!(
        "HTTP/1.1 200 OK\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        body.len(),
        body
    );

    socket.write_all(response.as_bytes()).await?;

    Ok(code)
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    scope: String,
    expires_in: u64,
    refresh_token: Option<String>,
}
