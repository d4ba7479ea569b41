use std::{sync::Arc, time::Duration};

use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;

use crate::{
    Res,
    config::Config,
    server::{self, SharedState},
    types::{PkceToken, Token},
    utils, warning,
};

/// How long `authorize` waits for the browser to hit the callback.
const CALLBACK_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    refresh_token: String,
    expires_in: u64,
    #[serde(default)]
    scope: String,
}

/// Runs the PKCE authorization flow and returns the granted credentials.
///
/// Binds the local callback server first, so an unusable `SERVER_ADDRESS`
/// fails before the browser is opened. Then serves the callback, opens the
/// authorization URL in the default browser (printing it when that fails)
/// and waits for the callback to store a token in `shared_state`.
/// Persisting the token is left to the caller.
pub async fn authorize(config: Arc<Config>, shared_state: SharedState) -> Res<Token> {
    let client_id = config.client_id()?.to_string();
    let listener = server::bind(&config.server_address).await?;

    let code_verifier = utils::generate_code_verifier();
    let code_challenge = utils::generate_code_challenge(&code_verifier);

    {
        let mut lock = shared_state.lock().await;
        *lock = Some(PkceToken {
            code_verifier,
            token: None,
        });
    }

    let server_config = Arc::clone(&config);
    let server_state = Arc::clone(&shared_state);
    let server = tokio::spawn(async move {
        if let Err(e) = server::start_api_server(listener, server_config, server_state).await {
            warning!("Callback server stopped: {}", e);
        }
    });

    let auth_url = format!(
        "{spotify_auth_url}?client_id={client_id}&response_type=code&redirect_uri={redirect_uri}&code_challenge={code_challenge}&code_challenge_method=S256&scope={scope}",
        spotify_auth_url = config.auth_url,
        client_id = client_id,
        redirect_uri = config.redirect_uri,
        code_challenge = code_challenge,
        scope = config.scope.replace(' ', "%20")
    );

    if webbrowser::open(&auth_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    }

    let token = wait_for_token(shared_state).await;
    server.abort();

    token.ok_or_else(|| "Authentication failed or timed out.".into())
}

async fn wait_for_token(shared_state: SharedState) -> Option<Token> {
    use std::time::Instant;

    let start = Instant::now();

    while start.elapsed() < CALLBACK_TIMEOUT {
        let lock = shared_state.lock().await;
        if let Some(pkce_token) = lock.as_ref() {
            if let Some(token) = &pkce_token.token {
                return Some(token.clone());
            }
        }
        drop(lock);
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    None
}

/// Exchanges an authorization code plus PKCE verifier for a credential set.
///
/// The client secret is sent along when one is configured.
pub async fn exchange_code_pkce(config: &Config, code: &str, verifier: &str) -> Res<Token> {
    let client_id = config.client_id()?;

    let mut form = vec![
        ("grant_type", "authorization_code"),
        ("client_id", client_id),
        ("code", code),
        ("code_verifier", verifier),
        ("redirect_uri", config.redirect_uri.as_str()),
    ];
    if let Some(secret) = config.client_secret.as_deref() {
        form.push(("client_secret", secret));
    }

    let client = Client::new();
    let res = client
        .post(&config.token_url)
        .form(&form)
        .send()
        .await?
        .error_for_status()?;

    let json: TokenResponse = res.json().await?;

    Ok(Token {
        access_token: json.access_token,
        refresh_token: json.refresh_token,
        expires_in: json.expires_in,
        scope: json.scope,
        obtained_at: Utc::now().timestamp() as u64,
    })
}
