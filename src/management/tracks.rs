use std::path::{Path, PathBuf};

use super::store::{self, StoreError};
use crate::types::TrackFile;

pub const TRACK_FILE: &str = "tracks.json";

/// Track URIs handed from the collector to the playlist assembler.
pub struct TrackFileManager {
    path: PathBuf,
    file: TrackFile,
}

impl TrackFileManager {
    pub fn new(cache_dir: &Path, uris: Vec<String>) -> Self {
        Self {
            path: cache_dir.join(TRACK_FILE),
            file: TrackFile { uris },
        }
    }

    /// Reads `tracks.json` from `cache_dir`. URIs keep the order they were
    /// collected in.
    pub async fn load(cache_dir: &Path) -> Result<Self, StoreError> {
        let path = cache_dir.join(TRACK_FILE);
        let file: TrackFile = store::read_json(&path).await?;
        Ok(Self { path, file })
    }

    pub async fn persist(&self) -> Result<(), StoreError> {
        store::write_json(&self.path, &self.file).await
    }

    pub fn uris(&self) -> &[String] {
        &self.file.uris
    }

    pub fn count(&self) -> usize {
        self.file.uris.len()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
