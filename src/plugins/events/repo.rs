use serde_json::{Map, Value};

use crate::db::DbPool;
use crate::http_error::AppError;

/// Appends one event and returns its id. Events are never updated or deleted.
pub async fn insert_event(pool: &DbPool, kind: &str, story_id: Option<i64>, payload: &Map<String, Value>) -> Result<i64, AppError> {
    let payload_json = serde_json::to_string(payload)?;
    let id: i64 = sqlx::query_scalar("INSERT INTO event (type, story_id, ts, payload_json) VALUES (?, ?, ?, ?) RETURNING id")
        .bind(kind)
        .bind(story_id)
        .bind(chrono::Utc::now())
        .bind(payload_json)
        .fetch_one(pool)
        .await
        .map_err(AppError::from)?;
    Ok(id)
}
