use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{Res, config::Config, management::TokenManager, server::SharedState, spotify, success};

pub async fn auth(config: Arc<Config>) -> Res<()> {
    let shared_state: SharedState = Arc::new(Mutex::new(None));
    let token = spotify::auth::authorize(Arc::clone(&config), shared_state).await?;

    let token_mgr = TokenManager::new(&config.cache_dir(), token);
    token_mgr
        .persist()
        .await
        .map_err(|e| format!("Failed to save token to cache: {}", e))?;

    success!(
        "Authentication successful! Credentials stored in {}",
        token_mgr.path().display()
    );
    Ok(())
}
