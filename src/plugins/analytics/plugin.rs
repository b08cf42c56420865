use axum::{routing::get, Extension, Router};

use crate::db::DbPool;
use crate::kernel::Plugin;
use crate::plugins::analytics::handlers::top_stories;

pub struct AnalyticsPlugin {
    pub pool: DbPool,
}

impl AnalyticsPlugin {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl Plugin for AnalyticsPlugin {
    async fn router(&self) -> Router {
        Router::new()
            .route("/top-stories", get(top_stories))
            .layer(Extension(self.pool.clone()))
    }

    fn name(&self) -> &'static str {
        "analytics"
    }
}
