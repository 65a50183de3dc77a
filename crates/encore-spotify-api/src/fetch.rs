use crate::client::SpotifyClient;
use eyre::eyre;
use reqwest::Method;
use reqwest::Response;
use reqwest::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

impl SpotifyClient {
    /// GET `url` and decode the JSON body.
    pub(crate) async fn fetch<T>(&self, url: &str) -> eyre::Result<T>
    where
        T: DeserializeOwned,
    {
        let res = self.send(Method::GET, url, None::<&()>).await?;
        decode(res).await
    }

    /// GET `url`, mapping `204 No Content` to `None`.
    pub(crate) async fn fetch_optional<T>(&self, url: &str) -> eyre::Result<(StatusCode, Option<T>)>
    where
        T: DeserializeOwned,
    {
        let res = self.send(Method::GET, url, None::<&()>).await?;
        let status = res.status();
        if status == StatusCode::OK {
            Ok((status, Some(decode(res).await?)))
        } else {
            Ok((status, None))
        }
    }

    /// POST a JSON body and decode the JSON reply.
    pub(crate) async fn post_json<B, T>(&self, url: &str, body: &B) -> eyre::Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let res = self.send(Method::POST, url, Some(body)).await?;
        decode(res).await
    }

    /// Fire a player command and hand back the status; the body is discarded.
    pub(crate) async fn command<B>(
        &self,
        method: Method,
        url: &str,
        body: Option<&B>,
    ) -> eyre::Result<StatusCode>
    where
        B: Serialize + ?Sized,
    {
        let res = self.send(method, url, body).await?;
        Ok(res.status())
    }

    async fn send<B>(&self, method: Method, url: &str, body: Option<&B>) -> eyre::Result<Response>
    where
        B: Serialize + ?Sized,
    {
        debug!("{} {}", method, url);
        let mut req = self
            .http
            .request(method.clone(), url)
            .bearer_auth(self.bearer.secret());
        req = match body {
            Some(body) => req.json(body),
            // Spotify rejects body-less POST/PUT without a length.
            None if method != Method::GET => req.header(reqwest::header::CONTENT_LENGTH, "0"),
            None => req,
        };
        let res = req.send().await?;

        let status = res.status();
        if status.is_client_error() || status.is_server_error() {
            let body = res.text().await.unwrap_or_default();
            return Err(eyre!("{} {} failed with {}: {}", method, url, status, body));
        }
        Ok(res)
    }
}

async fn decode<T>(res: Response) -> eyre::Result<T>
where
    T: DeserializeOwned,
{
    let res = res.text().await?;
    match serde_json::from_str(&res) {
        Ok(x) => Ok(x),
        Err(e) => Err(eyre::Error::new(e).wrap_err(format!("Failed to deserialize:\n{}", res))),
    }
}
