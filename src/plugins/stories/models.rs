use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One unit of story content. Only ever stored inside a story's `pages_json`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Page {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(rename = "mediaUrl")]
    pub media_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

impl Page {
    pub fn image(media_url: impl Into<String>, caption: impl Into<String>) -> Self {
        Self { kind: "image".to_string(), media_url: media_url.into(), caption: Some(caption.into()) }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, FromRow)]
pub struct StorySummary {
    pub id: i64,
    pub title: String,
    pub category: String,
    pub cover_url: String,
}

#[derive(Debug, FromRow)]
pub struct StoryRow {
    pub id: i64,
    pub title: String,
    pub category: String,
    pub cover_url: String,
    pub pages_json: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StoryDetail {
    pub id: i64,
    pub title: String,
    pub category: String,
    pub cover_url: String,
    pub pages: Vec<Page>,
}

impl TryFrom<StoryRow> for StoryDetail {
    type Error = serde_json::Error;

    fn try_from(row: StoryRow) -> Result<Self, Self::Error> {
        let pages = serde_json::from_str(&row.pages_json)?;
        Ok(Self { id: row.id, title: row.title, category: row.category, cover_url: row.cover_url, pages })
    }
}

#[derive(Debug, Clone)]
pub struct NewStory {
    pub title: String,
    pub category: String,
    pub cover_url: String,
    pub pages: Vec<Page>,
}
