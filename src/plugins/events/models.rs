use serde::Deserialize;
use serde_json::{Map, Value};

pub const STORY_OPEN: &str = "story_open";

/// Body of `POST /api/events`. `type` is free-form and `story_id` is not checked
/// against existing stories; analytics never rejects on referential grounds.
#[derive(Deserialize, Debug)]
pub struct EventCreate {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub story_id: Option<i64>,
    #[serde(default)]
    pub payload: Option<Map<String, Value>>,
}
