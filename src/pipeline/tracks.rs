use indicatif::ProgressBar;

use crate::{Res, catalog::Catalog};

/// Expands release identifiers into track URIs.
///
/// Output order is release order, then track order within each release.
/// Every page of a release's track listing is fetched.
pub async fn collect_tracks<C: Catalog>(
    catalog: &C,
    release_ids: &[String],
    pb: &ProgressBar,
) -> Res<Vec<String>> {
    let mut track_uris: Vec<String> = Vec::new();
    let releases_total = release_ids.len();

    for (releases_count, release_id) in release_ids.iter().enumerate() {
        let mut next: Option<String> = None;
        loop {
            let page = catalog.album_tracks(release_id, next.as_deref()).await?;
            track_uris.extend(page.items.into_iter().map(|t| t.uri));
            next = page.next;
            if next.is_none() {
                break;
            }
        }

        pb.set_message(format!(
            "Collected {tracks} tracks from {releases_count}/{releases_total} releases.",
            tracks = track_uris.len(),
            releases_count = releases_count + 1,
            releases_total = releases_total
        ));
    }

    Ok(track_uris)
}
