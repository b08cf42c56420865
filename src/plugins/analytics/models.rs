use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, FromRow)]
pub struct TopStory {
    pub story_id: i64,
    pub title: String,
    pub opens: i64,
}
