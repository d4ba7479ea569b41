use std::sync::Arc;

use freshlist::{
    config::Config,
    server::{self, SharedState},
};
use tokio::sync::Mutex;

fn test_config() -> Arc<Config> {
    Arc::new(Config::from_lookup(|_| None).unwrap())
}

async fn spawn_server() -> (String, tokio::task::JoinHandle<()>) {
    let listener = server::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let state: SharedState = Arc::new(Mutex::new(None));

    let handle = tokio::spawn(async move {
        server::start_api_server(listener, test_config(), state)
            .await
            .unwrap();
    });

    (format!("http://{}", addr), handle)
}

#[tokio::test]
async fn test_health_reports_name_and_version() {
    let (base, handle) = spawn_server().await;

    let body: serde_json::Value = reqwest::get(format!("{}/health", base))
        .await
        .unwrap()
        .error_for_status()
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["status"], "ok");
    assert_eq!(body["name"], env!("CARGO_PKG_NAME"));
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));

    handle.abort();
}

#[tokio::test]
async fn test_callback_reaches_handler_through_extensions() {
    let (base, handle) = spawn_server().await;

    let denied = reqwest::get(format!("{}/callback?error=access_denied", base))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(denied.contains("Authorization denied"));

    // No verifier stored yet
    let missing = reqwest::get(format!("{}/callback?code=abc", base))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(missing.contains("Missing PKCE code verifier"));

    handle.abort();
}

#[tokio::test]
async fn test_bind_rejects_malformed_address() {
    let err = server::bind("localhost:notaport").await.unwrap_err();
    assert!(err.to_string().contains("Failed to parse server address"));
}

#[tokio::test]
async fn test_bind_fails_fast_when_port_is_taken() {
    let taken = server::bind("127.0.0.1:0").await.unwrap();
    let addr = taken.local_addr().unwrap().to_string();

    let err = server::bind(&addr).await.unwrap_err();
    assert!(err.to_string().contains("Failed to bind callback server"));
}

#[tokio::test]
async fn test_authorize_fails_before_waiting_when_port_is_taken() {
    let taken = server::bind("127.0.0.1:0").await.unwrap();
    let addr = taken.local_addr().unwrap().to_string();

    let config = Config::from_lookup(|key| match key {
        "SPOTIFY_API_AUTH_CLIENT_ID" => Some("client".to_string()),
        "SERVER_ADDRESS" => Some(addr.clone()),
        _ => None,
    })
    .unwrap();
    let state: SharedState = Arc::new(Mutex::new(None));

    let result = tokio::time::timeout(
        std::time::Duration::from_secs(5),
        freshlist::spotify::auth::authorize(Arc::new(config), state),
    )
    .await
    .expect("authorize should not wait for the callback");

    let err = result.unwrap_err();
    assert!(err.to_string().contains("Failed to bind callback server"));
}
