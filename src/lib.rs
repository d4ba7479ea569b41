//! freshlist library
//!
//! Builds a Spotify playlist out of the latest releases of the artists a
//! user follows. The work is a five stage pipeline: authorize, enumerate
//! followed artists, filter their recent releases, collect the release
//! tracks and assemble the playlist.
//!
//! # Modules
//!
//! - `api` - HTTP endpoints of the local OAuth callback server
//! - `catalog` - The catalog trait the pipeline stages are generic over
//! - `cli` - Command implementations with progress output
//! - `config` - `.env` loading and the run configuration
//! - `management` - Credential and track file persistence
//! - `pipeline` - Release selection, track collection and playlist assembly
//! - `server` - Local HTTP server for OAuth callbacks
//! - `spotify` - Spotify Web API client
//! - `types` - Data structures and API payloads
//! - `utils` - PKCE helpers, release kinds, dates and batching

pub mod api;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod management;
pub mod pipeline;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Every catalog call and pipeline stage returns this. The boxed error keeps
/// `Send + Sync` so results can cross the spawned callback server task.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Fetching followed artists...");
/// info!("Found {} releases", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only for fatal errors at the command layer. The process terminates with
/// exit code 1 right after printing, so nothing after the macro runs.
///
/// # Example
///
/// ```
/// error!("Failed to load configuration: {}", e);
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues such as releases with an unparsable release
/// date or a credential set that looks expired.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
