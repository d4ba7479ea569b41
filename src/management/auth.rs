use std::path::{Path, PathBuf};

use super::store::{self, StoreError};
use crate::types::Token;

pub const TOKEN_FILE: &str = "token.json";

/// Owns the persisted credential set.
///
/// Tokens are never refreshed; [`TokenManager::is_expired`] only lets the
/// caller warn before a run that upstream will most likely reject.
pub struct TokenManager {
    path: PathBuf,
    token: Token,
}

impl TokenManager {
    /// Wraps a freshly granted token; nothing is written until
    /// [`TokenManager::persist`].
    ///
    /// # Arguments
    ///
    /// * `cache_dir` - Directory holding `token.json`
    /// * `token` - Credential set returned by the code exchange
    pub fn new(cache_dir: &Path, token: Token) -> Self {
        TokenManager {
            path: cache_dir.join(TOKEN_FILE),
            token,
        }
    }

    /// Reads `token.json` from `cache_dir`.
    ///
    /// Returns [`StoreError::Missing`] when no credential file exists yet,
    /// which callers turn into a hint to run `freshlist auth`.
    pub async fn load(cache_dir: &Path) -> Result<Self, StoreError> {
        let path = cache_dir.join(TOKEN_FILE);
        let token: Token = store::read_json(&path).await?;
        Ok(Self { path, token })
    }

    /// Writes the token, creating the cache directory if needed.
    pub async fn persist(&self) -> Result<(), StoreError> {
        store::write_json(&self.path, &self.token).await
    }

    /// True once `now` (unix seconds) is past the token's lifetime.
    ///
    /// Credential files without `obtained_at` have an unknown age and are
    /// never reported as expired.
    pub fn is_expired(&self, now: u64) -> bool {
        if self.token.obtained_at == 0 {
            return false;
        }
        now >= self.token.obtained_at + self.token.expires_in
    }

    pub fn access_token(&self) -> &str {
        &self.token.access_token
    }

    pub fn current_token(&self) -> &Token {
        &self.token
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
