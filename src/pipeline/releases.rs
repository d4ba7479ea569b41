use std::collections::HashMap;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use indicatif::ProgressBar;

use crate::{Res, catalog::Catalog, types::Album, warning};

/// Lookback window for release dates.
///
/// The cutoff is the calendar date of `reference - lookback`; a release is
/// inside the window only when its date is strictly later than the cutoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReleaseWindow {
    cutoff: NaiveDate,
}

impl ReleaseWindow {
    /// Creates the window ending at `reference`.
    ///
    /// # Arguments
    ///
    /// * `reference` - Moment the run looks back from, usually now
    /// * `lookback` - Length of the window, e.g. `Duration::weeks(2)`
    ///
    /// # Example
    ///
    /// ```
    /// let reference = NaiveDate::from_ymd_opt(2024, 6, 15)
    ///     .unwrap()
    ///     .and_hms_opt(12, 0, 0)
    ///     .unwrap();
    /// let window = ReleaseWindow::new(reference, Duration::weeks(2));
    /// assert_eq!(window.cutoff(), NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
    /// ```
    pub fn new(reference: NaiveDateTime, lookback: Duration) -> Self {
        let start = reference
            .checked_sub_signed(lookback)
            .unwrap_or(NaiveDateTime::MIN);
        Self {
            cutoff: start.date(),
        }
    }

    /// Last date that is no longer part of the window.
    pub fn cutoff(&self) -> NaiveDate {
        self.cutoff
    }

    /// True for dates strictly after the cutoff.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date > self.cutoff
    }
}

/// Release name to the artist name it was last admitted under.
///
/// Re-listings under the same artist are rejected while same-named releases
/// by a different artist pass and take over the binding.
#[derive(Debug, Default)]
pub struct ReleaseRegistry {
    names: HashMap<String, String>,
}

impl ReleaseRegistry {
    /// Records `name` under `artist` and returns whether the release is new.
    ///
    /// Returns `false` only when `name` is currently bound to the same
    /// artist. Any other case (unknown name or a different artist) binds
    /// `name` to `artist` and returns `true`.
    ///
    /// # Example
    ///
    /// ```
    /// let mut registry = ReleaseRegistry::default();
    /// assert!(registry.admit("Intro", "A"));
    /// assert!(!registry.admit("Intro", "A"));
    /// assert!(registry.admit("Intro", "B"));
    /// assert_eq!(registry.artist_for("Intro"), Some("B"));
    /// ```
    pub fn admit(&mut self, name: &str, artist: &str) -> bool {
        match self.names.get(name) {
            Some(seen) if seen == artist => false,
            _ => {
                self.names.insert(name.to_string(), artist.to_string());
                true
            }
        }
    }

    pub fn artist_for(&self, name: &str) -> Option<&str> {
        self.names.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Window plus registry, applied release by release in listing order.
#[derive(Debug)]
pub struct ReleaseFilter {
    window: ReleaseWindow,
    registry: ReleaseRegistry,
}

impl ReleaseFilter {
    pub fn new(window: ReleaseWindow) -> Self {
        Self {
            window,
            registry: ReleaseRegistry::default(),
        }
    }

    /// Decides whether `album` is admitted.
    ///
    /// Fails only when the release date is not a `YYYY-MM-DD` date; the
    /// registry is left untouched in that case and for releases outside the
    /// window.
    pub fn consider(&mut self, album: &Album) -> Result<bool, chrono::ParseError> {
        let release_date = NaiveDate::parse_from_str(&album.release_date, "%Y-%m-%d")?;

        if !self.window.contains(release_date) {
            return Ok(false);
        }

        Ok(self.registry.admit(&album.name, album.primary_artist()))
    }

    pub fn registry(&self) -> &ReleaseRegistry {
        &self.registry
    }
}

/// Fetches every artist's releases and keeps the admitted ones, in artist
/// order then listing order.
///
/// Releases with a malformed date are reported and skipped. Any catalog
/// error aborts the stage.
pub async fn select_releases<C: Catalog>(
    catalog: &C,
    artist_ids: &[String],
    window: ReleaseWindow,
    pb: &ProgressBar,
) -> Res<Vec<Album>> {
    let mut filter = ReleaseFilter::new(window);
    let mut admitted: Vec<Album> = Vec::new();
    let artists_total = artist_ids.len();

    for (artists_count, artist_id) in artist_ids.iter().enumerate() {
        let mut releases: Vec<Album> = Vec::new();
        let mut next: Option<String> = None;
        loop {
            let page = catalog.artist_releases(artist_id, next.as_deref()).await?;
            releases.extend(page.items);
            next = page.next;
            if next.is_none() {
                break;
            }
        }

        for album in releases {
            match filter.consider(&album) {
                Ok(true) => admitted.push(album),
                Ok(false) => {}
                Err(e) => pb.suspend(|| {
                    warning!(
                        "Skipping {} by {}: release date '{}' is not a day ({})",
                        album.name,
                        album.primary_artist(),
                        album.release_date,
                        e
                    )
                }),
            }
        }

        pb.set_message(format!(
            "Checked releases of {artists_count}/{artists_total} artists, {admitted} admitted.",
            artists_count = artists_count + 1,
            artists_total = artists_total,
            admitted = admitted.len()
        ));
    }

    Ok(admitted)
}
