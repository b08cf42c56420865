use sqlx::{Executor, Sqlite};

use crate::db::DbPool;
use crate::http_error::AppError;
use crate::plugins::stories::models::{NewStory, StoryDetail, StoryRow, StorySummary};

pub async fn insert_story<'e, E>(executor: E, story: &NewStory) -> Result<i64, AppError>
where
    E: Executor<'e, Database = Sqlite>,
{
    let pages_json = serde_json::to_string(&story.pages)?;
    let id: i64 = sqlx::query_scalar("INSERT INTO story (title, category, cover_url, pages_json, created_at) VALUES (?, ?, ?, ?, ?) RETURNING id")
        .bind(&story.title)
        .bind(&story.category)
        .bind(&story.cover_url)
        .bind(pages_json)
        .bind(chrono::Utc::now())
        .fetch_one(executor)
        .await
        .map_err(AppError::from)?;
    Ok(id)
}

pub async fn any_story<'e, E>(executor: E) -> Result<bool, AppError>
where
    E: Executor<'e, Database = Sqlite>,
{
    let first: Option<i64> = sqlx::query_scalar("SELECT id FROM story LIMIT 1")
        .fetch_optional(executor)
        .await
        .map_err(AppError::from)?;
    Ok(first.is_some())
}

pub async fn count_stories(pool: &DbPool) -> Result<i64, AppError> {
    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM story")
        .fetch_one(pool)
        .await
        .map_err(AppError::from)?;
    Ok(total)
}

/// Ordered by id; `category` is an exact, case-sensitive match.
pub async fn list_stories(pool: &DbPool, category: Option<&str>) -> Result<Vec<StorySummary>, AppError> {
    let mut sql = String::from("SELECT id, title, category, cover_url FROM story");
    if category.is_some() {
        sql.push_str(" WHERE category = ?");
    }
    sql.push_str(" ORDER BY id");

    let mut q = sqlx::query_as::<_, StorySummary>(&sql);
    if let Some(category) = category {
        q = q.bind(category);
    }
    let items = q.fetch_all(pool).await.map_err(AppError::from)?;
    Ok(items)
}

pub async fn get_story(pool: &DbPool, id: i64) -> Result<StoryDetail, AppError> {
    let row = sqlx::query_as::<_, StoryRow>("SELECT id, title, category, cover_url, pages_json FROM story WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::not_found(format!("story {} not found", id)))?;

    Ok(StoryDetail::try_from(row)?)
}
