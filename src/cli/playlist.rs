use chrono::Local;

use crate::{
    Res,
    config::Config,
    info,
    management::{StoreError, TrackFileManager},
    pipeline,
    spotify::SpotifyClient,
    success, utils,
};

/// Creates today's playlist from the persisted track file.
pub async fn playlist(config: &Config, open: bool) -> Res<()> {
    config.user_id()?;

    let track_mgr = match TrackFileManager::load(&config.cache_dir()).await {
        Ok(mgr) => mgr,
        Err(StoreError::Missing(path)) => {
            return Err(format!(
                "No track file at {}. Run freshlist collect first.",
                path.display()
            )
            .into());
        }
        Err(e) => return Err(e.into()),
    };

    if track_mgr.count() == 0 {
        info!("Track file is empty, no playlist created.");
        return Ok(());
    }

    let token_mgr = super::load_credentials(config).await?;
    let client = SpotifyClient::new(config, token_mgr.access_token());

    let name = utils::playlist_name(&config.playlist_prefix, Local::now().date_naive());
    let pb = super::spinner("Creating playlist...");
    let result = pipeline::assemble_playlist(
        &client,
        &name,
        "Releases of followed artists",
        track_mgr.uris(),
        &pb,
    )
    .await;
    pb.finish_and_clear();
    let playlist = result?;

    success!(
        "Playlist {} created with {} tracks: {}",
        name,
        track_mgr.count(),
        playlist.url
    );
    if open {
        super::open_in_browser(&playlist.url);
    }

    Ok(())
}
