use axum::{Extension, Router, routing::get};
use std::{net::SocketAddr, str::FromStr, sync::Arc};
use tokio::{net::TcpListener, sync::Mutex};

use crate::{Res, api, config::Config, types::PkceToken};

/// PKCE verifier and, once the callback ran, the exchanged token.
pub type SharedState = Arc<Mutex<Option<PkceToken>>>;

/// Binds the callback listener on `address`.
///
/// Called before the browser is opened so that a malformed address or a
/// port already in use fails the authorization right away.
///
/// # Arguments
///
/// * `address` - `host:port`, usually `SERVER_ADDRESS`
pub async fn bind(address: &str) -> Res<TcpListener> {
    let addr = SocketAddr::from_str(address)
        .map_err(|e| format!("Failed to parse server address '{}': {}", address, e))?;

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| format!("Failed to bind callback server on {}: {}", addr, e))?;
    Ok(listener)
}

/// Routes of the callback server, with config and PKCE state as extensions.
pub fn router(config: Arc<Config>, state: SharedState) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/callback", get(api::callback))
        .layer(Extension(state))
        .layer(Extension(config))
}

/// Serves `/health` and `/callback` on an already bound listener until the
/// task is aborted.
pub async fn start_api_server(
    listener: TcpListener,
    config: Arc<Config>,
    state: SharedState,
) -> Res<()> {
    axum::serve(listener, router(config, state)).await?;
    Ok(())
}
