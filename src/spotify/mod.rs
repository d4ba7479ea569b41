//! # Spotify Integration Module
//!
//! HTTP integration with the Spotify Web API: the PKCE authorization flow and
//! a bearer-authenticated [`SpotifyClient`] implementing
//! [`crate::catalog::Catalog`] for the pipeline.
//!
//! ## Core Modules
//!
//! - [`auth`] - PKCE authorization: code verifier/challenge, browser launch,
//!   local callback server and the code-for-token exchange
//! - [`artists`] - Followed artists listing
//! - [`releases`] - Artist release listings and album track listings
//! - [`playlist`] - Playlist creation and track appends
//!
//! ## API Coverage
//!
//! - `GET /me/following` - Followed artists, paged through `next`
//! - `GET /artists/{id}/albums` - Releases filtered by `include_groups`
//! - `GET /albums/{id}/tracks` - Tracks of a release
//! - `POST /users/{user_id}/playlists` - Create a playlist
//! - `POST /playlists/{playlist_id}/tracks` - Append up to 100 tracks
//! - `POST /api/token` - Authorization code exchange
//!
//! ## Error Handling
//!
//! Transport errors and non-2xx statuses propagate as [`crate::Res`] errors.
//! There is no retry and no token refresh; a stale token fails upstream and
//! the caller aborts the run.
//!
//! ## Usage
//!
//! ```rust
//! let client = SpotifyClient::new(&config, token_mgr.access_token());
//! let page = client.get_followed_artists(None).await?;
//! let releases = client.get_artist_releases(&page.items[0].id, None).await?;
//! ```

pub mod artists;
pub mod auth;
mod client;
pub mod playlist;
pub mod releases;

pub use client::SpotifyClient;

use crate::{
    Res,
    catalog::Catalog,
    types::{Album, Artist, Page, PlaylistHandle, Track},
};

impl Catalog for SpotifyClient {
    async fn followed_artists(&self, next: Option<&str>) -> Res<Page<Artist>> {
        self.get_followed_artists(next).await
    }

    async fn artist_releases(&self, artist_id: &str, next: Option<&str>) -> Res<Page<Album>> {
        self.get_artist_releases(artist_id, next).await
    }

    async fn album_tracks(&self, album_id: &str, next: Option<&str>) -> Res<Page<Track>> {
        self.get_album_tracks(album_id, next).await
    }

    async fn create_playlist(&self, name: &str, description: &str) -> Res<PlaylistHandle> {
        self.post_playlist(name, description).await
    }

    async fn append_tracks(&self, playlist_id: &str, uris: &[String]) -> Res<()> {
        self.post_tracks(playlist_id, uris).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::client::page_url;
    use super::*;
    use crate::config::Config;

    fn client_with(pairs: &[(&str, &str)]) -> SpotifyClient {
        let config = Config::from_lookup(|key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        })
        .unwrap();
        SpotifyClient::new(&config, "token")
    }

    #[test]
    fn test_release_url_carries_kinds_and_limit() {
        let client = client_with(&[("SPOTIFY_API_URL", "http://127.0.0.1:9000/v1")]);
        assert_eq!(
            client.artist_releases_url("artist1"),
            "http://127.0.0.1:9000/v1/artists/artist1/albums?include_groups=album,single&limit=50"
        );
    }

    #[test]
    fn test_market_is_appended_when_configured() {
        let client = client_with(&[
            ("FRESHLIST_RELEASE_TYPES", "single,appears_on"),
            ("SPOTIFY_MARKET", "GH"),
        ]);
        assert_eq!(
            client.artist_releases_url("a"),
            "https://api.spotify.com/v1/artists/a/albums?include_groups=single,appears_on&limit=50&market=GH"
        );
        assert_eq!(
            client.album_tracks_url("r"),
            "https://api.spotify.com/v1/albums/r/tracks?limit=50&market=GH"
        );
        // Followed artists are not market scoped
        assert_eq!(
            client.followed_artists_url(),
            "https://api.spotify.com/v1/me/following?type=artist&limit=50"
        );
    }

    #[test]
    fn test_next_url_is_used_unchanged() {
        let next = "https://api.spotify.com/v1/me/following?type=artist&after=xyz&limit=50";
        let url = page_url(Some(next), || panic!("first page must not be built"));
        assert_eq!(url, next);

        assert_eq!(page_url(None, || "first".to_string()), "first");
    }
}
