//! # CLI Module
//!
//! User-facing commands. Each command loads what it needs (configuration,
//! credentials, the track file), drives the pipeline with a spinner for
//! feedback and reports the outcome with the crate's output macros.
//!
//! ## Commands
//!
//! - [`auth`] - Spotify PKCE authorization, writes the credential file
//! - [`run`] - Full pipeline: artists, releases, tracks, playlist
//! - [`collect`] - Artists, releases and tracks; writes the track file only
//! - [`playlist`] - Builds the playlist from a previously written track file
//!
//! ## Typical usage
//!
//! ```bash
//! freshlist auth                              # once, or when the token expired
//! freshlist run --open                        # last two weeks, open the result
//! freshlist run --weeks 4 --type album        # albums of the last four weeks
//! freshlist collect --reference-date 2024-06-15
//! freshlist playlist
//! ```
//!
//! Commands return [`crate::Res`]; the binary prints the error and exits
//! with code 1.

mod auth;
mod playlist;
mod run;

use std::time::Duration;

use chrono::Utc;
use indicatif::{ProgressBar, ProgressStyle};

pub use auth::auth;
pub use playlist::playlist;
pub use run::{RunOptions, collect, run};

use crate::{
    Res,
    config::Config,
    management::{StoreError, TokenManager},
    warning,
};

/// Loads the credential file, warning when the token looks expired.
pub(crate) async fn load_credentials(config: &Config) -> Res<TokenManager> {
    let token_mgr = match TokenManager::load(&config.cache_dir()).await {
        Ok(mgr) => mgr,
        Err(StoreError::Missing(_)) => {
            return Err("No credentials found. Please run freshlist auth".into());
        }
        Err(e) => {
            return Err(format!(
                "Failed to load token. Please run freshlist auth\n Error: {}",
                e
            )
            .into());
        }
    };

    if token_mgr.is_expired(Utc::now().timestamp() as u64) {
        warning!("The stored access token looks expired. Run freshlist auth if requests fail.");
    }

    Ok(token_mgr)
}

pub(crate) fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}

pub(crate) fn open_in_browser(url: &str) {
    if webbrowser::open(url).is_err() {
        warning!("Failed to open browser. Playlist is at {}", url);
    }
}
