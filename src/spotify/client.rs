use reqwest::Client;
use serde::{Serialize, de::DeserializeOwned};

use crate::{Res, config::Config, utils::ReleaseKinds};

/// Page size requested from every listing endpoint.
pub(crate) const PAGE_LIMIT: u32 = 50;

/// Bearer-authenticated client for the Spotify Web API.
///
/// Non-2xx responses are turned into errors by `error_for_status` and are
/// never retried.
pub struct SpotifyClient {
    pub(crate) http: Client,
    pub(crate) api_url: String,
    pub(crate) token: String,
    pub(crate) market: Option<String>,
    pub(crate) release_types: ReleaseKinds,
    pub(crate) user_id: Option<String>,
    pub(crate) playlist_public: bool,
}

impl SpotifyClient {
    /// Builds a client from the run configuration and an access token.
    pub fn new(config: &Config, token: &str) -> Self {
        Self {
            http: Client::new(),
            api_url: config.api_url.clone(),
            token: token.to_string(),
            market: config.market.clone(),
            release_types: config.release_types.clone(),
            user_id: config.user_id.clone(),
            playlist_public: config.playlist_public,
        }
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Res<T> {
        let response = self
            .http
            .get(url)
            .bearer_auth(&self.token)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json::<T>().await?)
    }

    pub(crate) async fn post_json<B, T>(&self, url: &str, body: &B) -> Res<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let response = self
            .http
            .post(url)
            .bearer_auth(&self.token)
            .json(body)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json::<T>().await?)
    }

    /// Appends `&market=..` when a market is configured.
    pub(crate) fn with_market(&self, mut url: String) -> String {
        if let Some(market) = &self.market {
            url.push_str(&format!("&market={}", market));
        }
        url
    }
}

/// Picks the URL of the page to fetch: the `next` URL handed back by the
/// previous page as is, otherwise the first page built by `first`.
pub(crate) fn page_url(next: Option<&str>, first: impl FnOnce() -> String) -> String {
    match next {
        Some(url) => url.to_string(),
        None => first(),
    }
}
