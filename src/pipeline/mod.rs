//! # Release Playlist Pipeline
//!
//! Stages 2-5 of a run, executed strictly in sequence against a
//! [`Catalog`]:
//!
//! ```text
//! enumerate_artists -> select_releases -> collect_tracks -> assemble_playlist
//!      artist ids         releases          track uris         playlist
//! ```
//!
//! Every stage reads its input from and writes its output to a
//! [`RunContext`]. Between track collection and playlist assembly the track
//! URIs are written to the track file so `freshlist playlist` can resume
//! from it. A catalog error in any stage aborts the run; nothing downstream
//! executes.

mod artists;
mod playlist;
mod releases;
mod tracks;

use std::path::Path;

use indicatif::ProgressBar;

pub use artists::enumerate_artists;
pub use playlist::assemble_playlist;
pub use releases::{ReleaseFilter, ReleaseRegistry, ReleaseWindow, select_releases};
pub use tracks::collect_tracks;

use crate::{
    Res,
    catalog::Catalog,
    management::TrackFileManager,
    types::{Album, PlaylistHandle, Token},
};

/// State of a single run, filled stage by stage.
#[derive(Debug, Clone)]
pub struct RunContext {
    pub credentials: Token,
    pub artist_ids: Vec<String>,
    pub releases: Vec<Album>,
    pub track_uris: Vec<String>,
    pub playlist: Option<PlaylistHandle>,
}

impl RunContext {
    /// Starts an empty run holding only the credentials from stage 1.
    pub fn new(credentials: Token) -> Self {
        Self {
            credentials,
            artist_ids: Vec::new(),
            releases: Vec::new(),
            track_uris: Vec::new(),
            playlist: None,
        }
    }

    /// Ids of the admitted releases, in admission order.
    pub fn release_ids(&self) -> Vec<String> {
        self.releases.iter().map(|r| r.id.clone()).collect()
    }
}

/// What a run produces: the window releases are taken from and the
/// playlist they end up in.
#[derive(Debug, Clone)]
pub struct RunPlan {
    pub window: ReleaseWindow,
    pub playlist_name: String,
    pub playlist_description: String,
}

/// Runs artist enumeration, release selection and track collection.
pub async fn collect<C: Catalog>(
    catalog: &C,
    ctx: &mut RunContext,
    window: ReleaseWindow,
    pb: &ProgressBar,
) -> Res<()> {
    ctx.artist_ids = enumerate_artists(catalog, pb).await?;
    ctx.releases = select_releases(catalog, &ctx.artist_ids, window, pb).await?;
    ctx.track_uris = collect_tracks(catalog, &ctx.release_ids(), pb).await?;
    Ok(())
}

/// Runs the whole pipeline, persisting the track file in `cache_dir`
/// before the playlist is created.
///
/// Returns `None` without creating a playlist when no tracks were collected.
pub async fn run<C: Catalog>(
    catalog: &C,
    ctx: &mut RunContext,
    plan: &RunPlan,
    cache_dir: &Path,
    pb: &ProgressBar,
) -> Res<Option<PlaylistHandle>> {
    collect(catalog, ctx, plan.window, pb).await?;

    TrackFileManager::new(cache_dir, ctx.track_uris.clone())
        .persist()
        .await?;

    if ctx.track_uris.is_empty() {
        return Ok(None);
    }

    let playlist = assemble_playlist(
        catalog,
        &plan.playlist_name,
        &plan.playlist_description,
        &ctx.track_uris,
        pb,
    )
    .await?;

    ctx.playlist = Some(playlist.clone());
    Ok(Some(playlist))
}
