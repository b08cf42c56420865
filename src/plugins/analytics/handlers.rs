use axum::{Extension, Json};

use crate::db::DbPool;
use crate::http_error::AppError;
use crate::plugins::analytics::models::TopStory;
use crate::plugins::analytics::repo;

pub async fn top_stories(Extension(pool): Extension<DbPool>) -> Result<Json<Vec<TopStory>>, AppError> {
    Ok(Json(repo::top_stories(&pool).await?))
}
