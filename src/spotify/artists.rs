use super::client::{PAGE_LIMIT, SpotifyClient, page_url};
use crate::{
    Res,
    types::{Artist, FollowedArtistsResponse, Page},
};

impl SpotifyClient {
    /// Retrieves a page of the artists the user follows.
    ///
    /// The first page is requested with `limit=50`; later pages use the
    /// `next` URL handed back by the previous response, which already
    /// carries the `after` cursor.
    ///
    /// # Example
    ///
    /// ```
    /// let page = client.get_followed_artists(None).await?;
    /// if let Some(next) = page.next.as_deref() {
    ///     let more = client.get_followed_artists(Some(next)).await?;
    /// }
    /// ```
    pub async fn get_followed_artists(&self, next: Option<&str>) -> Res<Page<Artist>> {
        let api_url = page_url(next, || self.followed_artists_url());
        let res = self.get_json::<FollowedArtistsResponse>(&api_url).await?;
        Ok(res.artists)
    }

    pub(crate) fn followed_artists_url(&self) -> String {
        format!(
            "{uri}/me/following?type=artist&limit={limit}",
            uri = self.api_url,
            limit = PAGE_LIMIT
        )
    }
}
