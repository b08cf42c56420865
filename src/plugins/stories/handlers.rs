use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query};
use axum::{Extension, Json};

use crate::db::DbPool;
use crate::http_error::AppError;
use crate::plugins::stories::models::{StoryDetail, StorySummary};
use crate::plugins::stories::repo;

#[derive(Debug, serde::Deserialize)]
pub struct ListQuery {
    pub category: Option<String>,
}

pub async fn list_stories(Extension(pool): Extension<DbPool>, q: Result<Query<ListQuery>, QueryRejection>) -> Result<Json<Vec<StorySummary>>, AppError> {
    let Query(q) = q?;
    let items = repo::list_stories(&pool, q.category.as_deref()).await?;
    Ok(Json(items))
}

pub async fn get_story(Extension(pool): Extension<DbPool>, id: Result<Path<i64>, PathRejection>) -> Result<Json<StoryDetail>, AppError> {
    let Path(id) = id?;
    let story = repo::get_story(&pool, id).await?;
    Ok(Json(story))
}
