use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::{Extension, Json};
use serde_json::{json, Value};

use crate::db::DbPool;
use crate::http_error::AppError;
use crate::plugins::events::models::EventCreate;
use crate::plugins::events::repo;

pub async fn create_event(Extension(pool): Extension<DbPool>, body: Result<Json<EventCreate>, JsonRejection>) -> Result<(StatusCode, Json<Value>), AppError> {
    let Json(payload) = body?;
    let data = payload.payload.unwrap_or_default();
    let id = repo::insert_event(&pool, &payload.kind, payload.story_id, &data).await?;
    tracing::debug!(event_id = id, kind = %payload.kind, story_id = ?payload.story_id, "event recorded");
    Ok((StatusCode::CREATED, Json(json!({ "ok": true }))))
}
