//! The catalog operations the pipeline depends on.
//!
//! [`crate::spotify::SpotifyClient`] implements this against the Spotify Web
//! API. Listing calls return one [`Page`]; `next` is `None` for the first
//! page and the previous page's `next` URL afterwards.

use std::future::Future;

use crate::{
    Res,
    types::{Album, Artist, Page, PlaylistHandle, Track},
};

pub trait Catalog: Sync {
    /// One page of the artists the user follows.
    fn followed_artists(&self, next: Option<&str>)
    -> impl Future<Output = Res<Page<Artist>>> + Send;

    /// One page of an artist's releases.
    fn artist_releases(
        &self,
        artist_id: &str,
        next: Option<&str>,
    ) -> impl Future<Output = Res<Page<Album>>> + Send;

    /// One page of a release's tracks.
    fn album_tracks(
        &self,
        album_id: &str,
        next: Option<&str>,
    ) -> impl Future<Output = Res<Page<Track>>> + Send;

    fn create_playlist(
        &self,
        name: &str,
        description: &str,
    ) -> impl Future<Output = Res<PlaylistHandle>> + Send;

    /// Appends `uris` to the end of the playlist. Callers keep each call at
    /// or below [`crate::utils::MAX_PLAYLIST_BATCH`] items.
    fn append_tracks(
        &self,
        playlist_id: &str,
        uris: &[String],
    ) -> impl Future<Output = Res<()>> + Send;
}
