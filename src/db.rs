use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};

use crate::config::DatabaseSettings;

pub type DbPool = Pool<Sqlite>;

const SCHEMA: [&str; 4] = [
    "CREATE TABLE IF NOT EXISTS story (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        category TEXT NOT NULL,
        cover_url TEXT NOT NULL,
        pages_json TEXT NOT NULL,
        created_at TEXT NOT NULL
    )",
    "CREATE INDEX IF NOT EXISTS ix_story_category ON story (category)",
    // story_id is deliberately not a foreign key: events may outlive or precede stories.
    "CREATE TABLE IF NOT EXISTS event (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        type TEXT NOT NULL,
        story_id INTEGER,
        ts TEXT NOT NULL,
        payload_json TEXT NOT NULL
    )",
    "CREATE INDEX IF NOT EXISTS ix_event_type_story ON event (type, story_id)",
];

pub async fn init_db(database_url: &str) -> anyhow::Result<DbPool> {
    init_db_with(&DatabaseSettings { url: database_url.to_string(), ..DatabaseSettings::default() }).await
}

/// Opens the pool and makes sure both tables exist.
pub async fn init_db_with(settings: &DatabaseSettings) -> anyhow::Result<DbPool> {
    let options = SqliteConnectOptions::from_str(&settings.url)?.create_if_missing(true);

    // every connection to `:memory:` is its own database, so pin a single one for the pool's lifetime
    let pool_options = if is_in_memory(&settings.url) {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
    } else {
        SqlitePoolOptions::new().max_connections(settings.max_connections.max(1))
    };

    let pool = pool_options.connect_with(options).await?;
    ensure_schema(&pool).await?;
    tracing::info!(url = %settings.url, "database ready");
    Ok(pool)
}

/// Idempotent; safe to run on every startup.
pub async fn ensure_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}

fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn ensure_schema_can_run_twice() -> anyhow::Result<()> {
        let pool = init_db("sqlite::memory:").await?;
        ensure_schema(&pool).await?;

        let tables: Vec<(String,)> =
            sqlx::query_as("SELECT name FROM sqlite_master WHERE type = 'table' AND name IN ('story', 'event') ORDER BY name")
                .fetch_all(&pool)
                .await?;
        assert_eq!(tables, vec![("event".to_string(),), ("story".to_string(),)]);
        Ok(())
    }

    #[tokio::test]
    async fn unreachable_store_fails_startup() {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}/no/such/dir/app.db", dir.path().display());
        assert!(init_db(&url).await.is_err());
    }

    #[test]
    fn detects_in_memory_urls() {
        assert!(is_in_memory("sqlite::memory:"));
        assert!(is_in_memory("sqlite://file:demo?mode=memory&cache=shared"));
        assert!(!is_in_memory("sqlite://ministories.db"));
    }
}
