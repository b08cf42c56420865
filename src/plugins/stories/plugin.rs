use axum::{routing::get, Extension, Router};

use crate::db::DbPool;
use crate::kernel::Plugin;
use crate::plugins::stories::handlers::*;

pub struct StoriesPlugin {
    pub pool: DbPool,
}

impl StoriesPlugin {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl Plugin for StoriesPlugin {
    async fn router(&self) -> Router {
        Router::new()
            .route("/", get(list_stories))
            .route("/:id", get(get_story))
            .layer(Extension(self.pool.clone()))
    }

    fn name(&self) -> &'static str {
        "stories"
    }
}
