use std::net::SocketAddr;
use std::time::Duration;

use fangspiel_server::build_app;
use fangspiel_server::config::ServerConfig;

pub struct TestServer {
    pub addr: SocketAddr,
    _shutdown: tokio::task::JoinHandle<()>,
}

impl TestServer {
    /// Start a test server with the default config.
    pub async fn new() -> Self {
        Self::from_config(ServerConfig::default()).await
    }

    /// Start a test server with a custom config.
    pub async fn from_config(config: ServerConfig) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let (app, _state) = build_app(config);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Give the server a moment to start accepting
        tokio::time::sleep(Duration::from_millis(20)).await;

        Self {
            addr,
            _shutdown: handle,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

/// Register a player and return the parsed response body.
pub async fn register(
    client: &reqwest::Client,
    base_url: &str,
    id: &str,
) -> serde_json::Value {
    let resp = client
        .post(format!("{base_url}/register/{id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200, "Registration of {id} should succeed");
    resp.json().await.unwrap()
}
