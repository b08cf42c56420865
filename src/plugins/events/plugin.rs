use axum::{routing::post, Extension, Router};

use crate::db::DbPool;
use crate::kernel::Plugin;
use crate::plugins::events::handlers::create_event;

pub struct EventsPlugin {
    pub pool: DbPool,
}

impl EventsPlugin {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl Plugin for EventsPlugin {
    async fn router(&self) -> Router {
        Router::new()
            .route("/", post(create_event))
            .layer(Extension(self.pool.clone()))
    }

    fn name(&self) -> &'static str {
        "events"
    }
}
