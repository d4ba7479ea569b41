use super::client::{PAGE_LIMIT, SpotifyClient, page_url};
use crate::{
    Res,
    types::{Album, Page, Track},
};

impl SpotifyClient {
    /// Retrieves a page of an artist's releases restricted to the configured
    /// release kinds (and market, when set).
    ///
    /// # Arguments
    ///
    /// * `artist_id` - Spotify id of the artist
    /// * `next` - `next` URL of the previous page, `None` for the first page
    pub async fn get_artist_releases(
        &self,
        artist_id: &str,
        next: Option<&str>,
    ) -> Res<Page<Album>> {
        let api_url = page_url(next, || self.artist_releases_url(artist_id));
        self.get_json::<Page<Album>>(&api_url).await
    }

    /// Retrieves a page of a release's tracks.
    pub async fn get_album_tracks(&self, album_id: &str, next: Option<&str>) -> Res<Page<Track>> {
        let api_url = page_url(next, || self.album_tracks_url(album_id));
        self.get_json::<Page<Track>>(&api_url).await
    }

    pub(crate) fn artist_releases_url(&self, artist_id: &str) -> String {
        self.with_market(format!(
            "{uri}/artists/{id}/albums?include_groups={include_groups}&limit={limit}",
            uri = self.api_url,
            id = artist_id,
            include_groups = self.release_types,
            limit = PAGE_LIMIT
        ))
    }

    pub(crate) fn album_tracks_url(&self, album_id: &str) -> String {
        self.with_market(format!(
            "{uri}/albums/{id}/tracks?limit={limit}",
            uri = self.api_url,
            id = album_id,
            limit = PAGE_LIMIT
        ))
    }
}
