use std::net::SocketAddr;

use dotenvy::dotenv;
use ministories_api::config::Settings;
use ministories_api::kernel::bootstrap;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    ministories_api::init_tracing();

    let settings = Settings::from_env()?;
    let (pool, app) = bootstrap(&settings).await?;

    let addr: SocketAddr = format!("{}:{}", settings.http.host, settings.http.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("shutting down");
        })
        .await?;

    pool.close().await;
    Ok(())
}
