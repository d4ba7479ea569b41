use indicatif::ProgressBar;

use crate::{
    Res,
    catalog::Catalog,
    types::PlaylistHandle,
    utils::{self, MAX_PLAYLIST_BATCH},
};

/// Creates the playlist and appends `track_uris` batch by batch.
///
/// Batches are sent in order, so the playlist ends up in `track_uris` order.
/// A failing append aborts; batches already sent stay in the playlist.
pub async fn assemble_playlist<C: Catalog>(
    catalog: &C,
    name: &str,
    description: &str,
    track_uris: &[String],
    pb: &ProgressBar,
) -> Res<PlaylistHandle> {
    let playlist = catalog.create_playlist(name, description).await?;

    let batches = utils::balanced_batches(track_uris, MAX_PLAYLIST_BATCH);
    let batches_total = batches.len();

    for (batches_count, batch) in batches.into_iter().enumerate() {
        catalog
            .append_tracks(&playlist.id, batch)
            .await
            .map_err(|e| {
                format!(
                    "Failed to append batch {}/{} to playlist {}: {}",
                    batches_count + 1,
                    batches_total,
                    playlist.id,
                    e
                )
            })?;

        pb.set_message(format!(
            "Appended batch {batches_count}/{batches_total} ({size} tracks).",
            batches_count = batches_count + 1,
            batches_total = batches_total,
            size = batch.len()
        ));
    }

    Ok(playlist)
}
