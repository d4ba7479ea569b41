use indicatif::ProgressBar;

use crate::{Res, catalog::Catalog};

/// Walks the followed artists listing page by page and returns the artist
/// identifiers in listing order.
pub async fn enumerate_artists<C: Catalog>(catalog: &C, pb: &ProgressBar) -> Res<Vec<String>> {
    let mut artist_ids: Vec<String> = Vec::new();
    let mut next: Option<String> = None;

    loop {
        let page = catalog.followed_artists(next.as_deref()).await?;
        artist_ids.extend(page.items.into_iter().map(|a| a.id));
        pb.set_message(format!("Fetched {} followed artists...", artist_ids.len()));

        next = page.next;
        if next.is_none() {
            break;
        }
    }

    Ok(artist_ids)
}
