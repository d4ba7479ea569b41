//! Configuration management for freshlist.
//!
//! Values come from the process environment and a `.env` file in the local
//! data directory. They are read once at startup into a [`Config`] which is
//! then passed by reference to every command and pipeline stage.
//!
//! Precedence:
//! 1. Environment variables
//! 2. `.env` file in the local data directory
//! 3. `.env` file in the working directory
//! 4. Defaults listed on [`Config`]

use std::{env, path::PathBuf};

use chrono::Duration;
use thiserror::Error;

use crate::utils::{self, ReleaseKinds};

pub const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8888";
pub const DEFAULT_REDIRECT_URI: &str = "http://127.0.0.1:8888/callback";
pub const DEFAULT_SCOPE: &str = "user-follow-read playlist-modify-public playlist-modify-private";
pub const DEFAULT_PLAYLIST_PREFIX: &str = "New Releases";
pub const DEFAULT_LOOKBACK_WEEKS: u32 = 2;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Loads environment variables from `.env` files.
///
/// Looks for `freshlist/.env` in the platform-specific local data directory
/// (creating the directory if needed), then for a `.env` in the working
/// directory. Missing files are fine; variables already present in the
/// environment are never overridden.
///
/// - Linux: `~/.local/share/freshlist/.env`
/// - macOS: `~/Library/Application Support/freshlist/.env`
/// - Windows: `%LOCALAPPDATA%/freshlist/.env`
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("freshlist/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    dotenv::dotenv().ok();

    Ok(())
}

/// Run configuration, built once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// `SPOTIFY_API_AUTH_CLIENT_ID`, needed by `auth` only.
    pub client_id: Option<String>,
    /// `SPOTIFY_API_AUTH_CLIENT_SECRET`, sent on code exchange when present.
    pub client_secret: Option<String>,
    pub redirect_uri: String,
    pub scope: String,
    pub auth_url: String,
    pub token_url: String,
    pub api_url: String,
    /// `SPOTIFY_USER_ID`, owner of created playlists.
    pub user_id: Option<String>,
    /// `SPOTIFY_MARKET`, passed as `market` to release listings.
    pub market: Option<String>,
    pub server_address: String,
    pub lookback_weeks: u32,
    pub release_types: ReleaseKinds,
    pub playlist_prefix: String,
    pub playlist_public: bool,
    /// Root for `cache/token.json` and `cache/tracks.json`.
    pub data_dir: PathBuf,
}

impl Config {
    /// Builds the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let or = |key: &str, default: &str| get(key).unwrap_or_else(|| default.to_string());

        let lookback_weeks = match get("FRESHLIST_LOOKBACK_WEEKS") {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .map_err(|e| ConfigError::Invalid {
                    name: "FRESHLIST_LOOKBACK_WEEKS",
                    reason: e.to_string(),
                })?,
            None => DEFAULT_LOOKBACK_WEEKS,
        };

        let release_types = match get("FRESHLIST_RELEASE_TYPES") {
            Some(raw) => {
                utils::parse_release_kinds(&raw).map_err(|reason| ConfigError::Invalid {
                    name: "FRESHLIST_RELEASE_TYPES",
                    reason,
                })?
            }
            None => ReleaseKinds::default(),
        };

        let playlist_public = match get("FRESHLIST_PLAYLIST_PUBLIC") {
            Some(raw) => parse_bool(&raw).ok_or_else(|| ConfigError::Invalid {
                name: "FRESHLIST_PLAYLIST_PUBLIC",
                reason: format!("expected true or false, got '{}'", raw),
            })?,
            None => false,
        };

        let data_dir = match get("FRESHLIST_DATA_DIR") {
            Some(dir) => PathBuf::from(dir),
            None => {
                let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
                path.push("freshlist");
                path
            }
        };

        Ok(Self {
            client_id: get("SPOTIFY_API_AUTH_CLIENT_ID"),
            client_secret: get("SPOTIFY_API_AUTH_CLIENT_SECRET"),
            redirect_uri: or("SPOTIFY_API_REDIRECT_URI", DEFAULT_REDIRECT_URI),
            scope: or("SPOTIFY_API_AUTH_SCOPE", DEFAULT_SCOPE),
            auth_url: or("SPOTIFY_API_AUTH_URL", DEFAULT_AUTH_URL),
            token_url: or("SPOTIFY_API_TOKEN_URL", DEFAULT_TOKEN_URL),
            api_url: or("SPOTIFY_API_URL", DEFAULT_API_URL)
                .trim_end_matches('/')
                .to_string(),
            user_id: get("SPOTIFY_USER_ID"),
            market: get("SPOTIFY_MARKET"),
            server_address: or("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS),
            lookback_weeks,
            release_types,
            playlist_prefix: or("FRESHLIST_PLAYLIST_PREFIX", DEFAULT_PLAYLIST_PREFIX),
            playlist_public,
            data_dir,
        })
    }

    /// Client id for the authorization flow.
    ///
    /// Only `auth` needs it, so a missing value is reported here rather
    /// than when the configuration is built.
    pub fn client_id(&self) -> Result<&str, ConfigError> {
        self.client_id
            .as_deref()
            .ok_or(ConfigError::Missing("SPOTIFY_API_AUTH_CLIENT_ID"))
    }

    /// Owner of created playlists. Checked before a run starts fetching.
    pub fn user_id(&self) -> Result<&str, ConfigError> {
        self.user_id
            .as_deref()
            .ok_or(ConfigError::Missing("SPOTIFY_USER_ID"))
    }

    /// Lookback window, optionally overriding the configured week count.
    pub fn lookback(&self, weeks: Option<u32>) -> Duration {
        Duration::weeks(weeks.unwrap_or(self.lookback_weeks) as i64)
    }

    /// `<data_dir>/cache`, home of the credential and track files.
    pub fn cache_dir(&self) -> PathBuf {
        self.data_dir.join("cache")
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::utils::ReleaseKind;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_apply_when_unset() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.token_url, DEFAULT_TOKEN_URL);
        assert_eq!(config.lookback_weeks, 2);
        assert_eq!(config.lookback(None), Duration::weeks(2));
        assert_eq!(config.playlist_prefix, "New Releases");
        assert!(!config.playlist_public);
        assert!(config.market.is_none());

        let kinds: Vec<ReleaseKind> = config.release_types.iter().collect();
        assert_eq!(kinds, vec![ReleaseKind::Album, ReleaseKind::Single]);
    }

    #[test]
    fn test_required_values_are_reported_by_name() {
        let config = config_from(&[("SPOTIFY_USER_ID", "  ")]).unwrap();

        assert_eq!(
            config.user_id(),
            Err(ConfigError::Missing("SPOTIFY_USER_ID"))
        );
        assert_eq!(
            config.client_id(),
            Err(ConfigError::Missing("SPOTIFY_API_AUTH_CLIENT_ID"))
        );
    }

    #[test]
    fn test_overrides_are_parsed() {
        let config = config_from(&[
            ("SPOTIFY_USER_ID", "listener"),
            ("SPOTIFY_API_URL", "http://127.0.0.1:9000/v1/"),
            ("SPOTIFY_MARKET", "GH"),
            ("FRESHLIST_LOOKBACK_WEEKS", "4"),
            ("FRESHLIST_RELEASE_TYPES", "album"),
            ("FRESHLIST_PLAYLIST_PUBLIC", "yes"),
            ("FRESHLIST_DATA_DIR", "/tmp/freshlist-test"),
        ])
        .unwrap();

        assert_eq!(config.user_id(), Ok("listener"));
        assert_eq!(config.api_url, "http://127.0.0.1:9000/v1");
        assert_eq!(config.market.as_deref(), Some("GH"));
        assert_eq!(config.lookback(None), Duration::weeks(4));
        assert_eq!(config.lookback(Some(1)), Duration::weeks(1));
        assert_eq!(config.release_types.to_string(), "album");
        assert!(config.playlist_public);
        assert_eq!(
            config.cache_dir(),
            PathBuf::from("/tmp/freshlist-test/cache")
        );
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let err = config_from(&[("FRESHLIST_LOOKBACK_WEEKS", "two")]).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                name: "FRESHLIST_LOOKBACK_WEEKS",
                ..
            }
        ));

        let err = config_from(&[("FRESHLIST_RELEASE_TYPES", "bootleg")]).unwrap_err();
        assert!(err.to_string().contains("FRESHLIST_RELEASE_TYPES"));

        let err = config_from(&[("FRESHLIST_PLAYLIST_PUBLIC", "maybe")]).unwrap_err();
        assert!(err.to_string().contains("maybe"));
    }
}
