use super::client::SpotifyClient;
use crate::{
    Res,
    types::{
        AddTracksToPlaylistRequest, AddTracksToPlaylistResponse, CreatePlaylistRequest,
        CreatePlaylistResponse, PlaylistHandle,
    },
};

impl SpotifyClient {
    /// Creates a playlist owned by the configured user.
    pub async fn post_playlist(&self, name: &str, description: &str) -> Res<PlaylistHandle> {
        let user_id = self
            .user_id
            .as_deref()
            .ok_or("SPOTIFY_USER_ID must be set to create playlists")?;

        let api_url = format!(
            "{uri}/users/{user_id}/playlists",
            uri = self.api_url,
            user_id = user_id
        );
        let body = CreatePlaylistRequest {
            name: name.to_string(),
            description: description.to_string(),
            public: self.playlist_public,
            collaborative: false,
        };

        let resp = self
            .post_json::<_, CreatePlaylistResponse>(&api_url, &body)
            .await?;
        Ok(resp.into())
    }

    /// Appends one batch of track URIs to a playlist.
    pub async fn post_tracks(&self, playlist_id: &str, uris: &[String]) -> Res<String> {
        let api_url = format!(
            "{uri}/playlists/{id}/tracks",
            uri = self.api_url,
            id = playlist_id
        );
        let body = AddTracksToPlaylistRequest {
            uris: uris.to_vec(),
        };

        let resp = self
            .post_json::<_, AddTracksToPlaylistResponse>(&api_url, &body)
            .await?;
        Ok(resp.snapshot_id)
    }
}
