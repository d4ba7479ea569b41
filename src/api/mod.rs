//! # API Module
//!
//! HTTP endpoints of the short-lived local server that `freshlist auth`
//! starts while the user authorizes the application in the browser.
//!
//! - [`callback`] - Receives the authorization code from Spotify and
//!   exchanges it, together with the PKCE verifier, for a credential set.
//! - [`health`] - Returns status and version, handy for checking that the
//!   callback server is reachable on `SERVER_ADDRESS`.
//!
//! ```rust,ignore
//! use axum::{Router, routing::get};
//! use freshlist::api::{callback, health};
//!
//! let app = Router::new()
//!     .route("/callback", get(callback))
//!     .route("/health", get(health));
//! ```

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
