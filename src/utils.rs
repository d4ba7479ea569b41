use std::{collections::BTreeSet, fmt};

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::NaiveDate;
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};

/// Upper bound of items per "add tracks to playlist" request.
pub const MAX_PLAYLIST_BATCH: usize = 100;

pub fn generate_code_verifier() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(128)
        .map(char::from)
        .collect()
}

pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

/// Release group as understood by the `include_groups` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ReleaseKind {
    Album,
    Single,
    AppearsOn,
    Compilation,
}

impl ReleaseKind {
    pub const ALL: [ReleaseKind; 4] = [
        ReleaseKind::Album,
        ReleaseKind::Single,
        ReleaseKind::AppearsOn,
        ReleaseKind::Compilation,
    ];

    fn from_name(name: &str) -> Option<Self> {
        match name.replace('-', "_").as_str() {
            "album" => Some(ReleaseKind::Album),
            "single" => Some(ReleaseKind::Single),
            "appears_on" => Some(ReleaseKind::AppearsOn),
            "compilation" => Some(ReleaseKind::Compilation),
            _ => None,
        }
    }
}

impl fmt::Display for ReleaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReleaseKind::Album => "album",
            ReleaseKind::Single => "single",
            ReleaseKind::AppearsOn => "appears_on",
            ReleaseKind::Compilation => "compilation",
        };
        f.write_str(name)
    }
}

/// Ordered, duplicate free set of release kinds. Displays as the comma
/// separated list Spotify expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseKinds(pub BTreeSet<ReleaseKind>);

impl ReleaseKinds {
    pub fn iter(&self) -> impl Iterator<Item = ReleaseKind> + '_ {
        self.0.iter().copied()
    }
}

impl Default for ReleaseKinds {
    fn default() -> Self {
        ReleaseKinds(BTreeSet::from([ReleaseKind::Album, ReleaseKind::Single]))
    }
}

impl fmt::Display for ReleaseKinds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .iter()
            .map(|k| k.to_string())
            .collect::<Vec<_>>()
            .join(",");
        f.write_str(&joined)
    }
}

/// Parses a comma separated list of release kinds, or `all`.
///
/// Case-insensitive; `-` is accepted in place of `_`.
pub fn parse_release_kinds(input: &str) -> Result<ReleaseKinds, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("release types cannot be empty".to_string());
    }

    if input.eq_ignore_ascii_case("all") {
        return Ok(ReleaseKinds(ReleaseKind::ALL.into_iter().collect()));
    }

    let mut kinds = BTreeSet::new();
    for segment in input.split(',') {
        let segment = segment.trim().to_lowercase();
        if segment.is_empty() {
            return Err(format!("empty segment in '{}'", input));
        }
        match ReleaseKind::from_name(&segment) {
            Some(kind) => {
                kinds.insert(kind);
            }
            None => {
                return Err(format!(
                    "invalid value '{}', expected one of: album, single, appears_on, compilation, all",
                    segment
                ));
            }
        }
    }

    Ok(ReleaseKinds(kinds))
}

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(input: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|e| format!("invalid date '{}': {}", input, e))
}

/// Playlist name for a run on `date`, e.g. `New Releases - 10-19-2026`.
pub fn playlist_name(prefix: &str, date: NaiveDate) -> String {
    format!("{} - {}", prefix, date.format("%m-%d-%Y"))
}

/// Splits `items` into the fewest batches of at most `max_batch` items,
/// with sizes differing by at most one (larger batches first).
///
/// Order is preserved across batch boundaries. An empty input yields no
/// batches.
pub fn balanced_batches<T>(items: &[T], max_batch: usize) -> Vec<&[T]> {
    if items.is_empty() {
        return Vec::new();
    }

    let count = items.len().div_ceil(max_batch.max(1));
    let base = items.len() / count;
    let extra = items.len() % count;

    let mut batches = Vec::with_capacity(count);
    let mut start = 0;
    for i in 0..count {
        let size = base + usize::from(i < extra);
        batches.push(&items[start..start + size]);
        start += size;
    }

    batches
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sizes(total: usize) -> Vec<usize> {
        let items: Vec<usize> = (0..total).collect();
        balanced_batches(&items, MAX_PLAYLIST_BATCH)
            .iter()
            .map(|b| b.len())
            .collect()
    }

    #[test]
    fn test_batch_sizes_follow_the_ceiling() {
        assert_eq!(sizes(0), Vec::<usize>::new());
        assert_eq!(sizes(1), vec![1]);
        assert_eq!(sizes(80), vec![80]);
        assert_eq!(sizes(100), vec![100]);
        assert_eq!(sizes(101), vec![51, 50]);
        assert_eq!(sizes(150), vec![75, 75]);
        assert_eq!(sizes(200), vec![100, 100]);
        assert_eq!(sizes(250), vec![84, 83, 83]);
        assert_eq!(sizes(5000), vec![100; 50]);
    }

    #[test]
    fn test_batches_preserve_order_and_cover_everything_once() {
        let items: Vec<usize> = (0..250).collect();
        let flattened: Vec<usize> = balanced_batches(&items, MAX_PLAYLIST_BATCH)
            .into_iter()
            .flatten()
            .copied()
            .collect();

        assert_eq!(flattened, items);
    }

    #[test]
    fn test_zero_ceiling_degrades_to_single_items() {
        let items = [1, 2, 3];
        assert_eq!(balanced_batches(&items, 0).len(), 3);
    }
}
