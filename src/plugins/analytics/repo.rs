use crate::db::DbPool;
use crate::http_error::AppError;
use crate::plugins::analytics::models::TopStory;
use crate::plugins::events::models::STORY_OPEN;

/// Open counts per story, highest first, ties broken by story id.
///
/// The inner join drops events whose `story_id` no longer resolves to a story,
/// and stories nobody opened never appear.
pub async fn top_stories(pool: &DbPool) -> Result<Vec<TopStory>, AppError> {
    let items = sqlx::query_as::<_, TopStory>(
        "SELECT e.story_id AS story_id, s.title AS title, COUNT(*) AS opens \
         FROM event e JOIN story s ON s.id = e.story_id \
         WHERE e.type = ? AND e.story_id IS NOT NULL \
         GROUP BY e.story_id, s.title \
         ORDER BY opens DESC, e.story_id ASC",
    )
    .bind(STORY_OPEN)
    .fetch_all(pool)
    .await
    .map_err(AppError::from)?;
    Ok(items)
}
