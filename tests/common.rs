#![allow(dead_code)]

use std::path::PathBuf;

use ministories_api::config::{CorsPolicy, DatabaseSettings, HttpSettings, Settings};
use ministories_api::kernel::bootstrap;
use ministories_api::DbPool;
use tokio::net::TcpListener;

pub struct TestApp {
    pub base: String,
    pub pool: DbPool,
    pub client: reqwest::Client,
    server_handle: tokio::task::JoinHandle<()>,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        self.server_handle.abort();
    }
}

pub fn memory_settings() -> Settings {
    Settings {
        database: DatabaseSettings { url: "sqlite::memory:".to_string(), max_connections: 1 },
        http: HttpSettings {
            host: "127.0.0.1".to_string(),
            port: 0,
            cors: CorsPolicy::AllowList(vec!["http://localhost:5173".to_string()]),
            static_dir: PathBuf::from("does-not-exist"),
        },
    }
}

/// Runs the full bootstrap (schema, seed, router) and serves it on an ephemeral port.
pub async fn spawn_app(settings: Settings) -> anyhow::Result<TestApp> {
    let (pool, app) = bootstrap(&settings).await?;
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let server_handle = tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server error");
    });
    Ok(TestApp { base: format!("http://{}", addr), pool, client: reqwest::Client::new(), server_handle })
}
