//! Creates the tables and seeds demo stories without starting the server.

use dotenvy::dotenv;
use ministories_api::config::Settings;
use ministories_api::{db, seed};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    ministories_api::init_tracing();

    let settings = Settings::from_env()?;
    let pool = db::init_db_with(&settings.database).await?;
    let inserted = seed::seed_if_empty(&pool).await?;
    tracing::info!(inserted, url = %settings.database.url, "seed finished");

    pool.close().await;
    Ok(())
}
