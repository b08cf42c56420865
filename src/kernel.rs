use async_trait::async_trait;
use axum::http::HeaderValue;
use axum::Router;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::{CorsPolicy, HttpSettings, Settings};
use crate::db::{self, DbPool};
use crate::http_error::AppError;
use crate::plugins::analytics::AnalyticsPlugin;
use crate::plugins::events::EventsPlugin;
use crate::plugins::health::HealthPlugin;
use crate::plugins::metrics::MetricsPlugin;
use crate::plugins::stories::StoriesPlugin;
use crate::seed;

#[async_trait]
pub trait Plugin: Send + Sync {
    async fn router(&self) -> Router;

    fn name(&self) -> &'static str;
    /// Optional lifecycle hook called when the kernel starts.
    async fn on_start(&self) {}
}

/// The API surface, all sharing one pool.
pub fn api_plugins(pool: &DbPool) -> Vec<Box<dyn Plugin>> {
    vec![
        Box::new(HealthPlugin),
        Box::new(StoriesPlugin::new(pool.clone())),
        Box::new(EventsPlugin::new(pool.clone())),
        Box::new(AnalyticsPlugin::new(pool.clone())),
    ]
}

/// Builds the application router by mounting each plugin under `/api/{plugin.name()}`.
///
/// Unknown `/api/*` paths get a JSON 404. Everything else falls through to the
/// built frontend when `http.static_dir` holds an `index.html`.
pub async fn build_app(plugins: &[Box<dyn Plugin>], metrics: Option<&MetricsPlugin>, http: &HttpSettings) -> Router {
    let mut api = Router::new();

    for plugin in plugins.iter() {
        info!("starting plugin {}", plugin.name());
        plugin.on_start().await;
        let mut router = plugin.router().await;
        if let Some(metrics) = metrics {
            router = metrics.instrument(router, plugin.name());
        }
        api = api.nest(&format!("/{}", plugin.name()), router);
    }

    let api = api.fallback(|| async { AppError::not_found("notFound") });
    let mut app = Router::new().nest("/api", api);

    if let Some(metrics) = metrics {
        // not instrumented to avoid counting scrapes
        app = app.nest("/metrics", metrics.router());
    }

    if let Some(index) = http.index_file() {
        info!(dir = %http.static_dir.display(), "serving frontend bundle");
        app = app.fallback_service(ServeDir::new(&http.static_dir).fallback(ServeFile::new(index)));
    }

    app.layer(cors_layer(&http.cors)).layer(TraceLayer::new_for_http())
}

pub fn cors_layer(policy: &CorsPolicy) -> CorsLayer {
    match policy {
        CorsPolicy::AnyOrigin => CorsLayer::permissive(),
        CorsPolicy::AllowList(origins) => {
            let origins: Vec<HeaderValue> = origins
                .iter()
                .filter_map(|o| match HeaderValue::from_str(o) {
                    Ok(v) => Some(v),
                    Err(_) => {
                        tracing::warn!(origin = %o, "ignoring invalid CORS origin");
                        None
                    }
                })
                .collect();
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(AllowMethods::mirror_request())
                .allow_headers(AllowHeaders::mirror_request())
                .allow_credentials(true)
        }
    }
}

/// Startup sequence: connect and ensure schema, seed an empty store, then build
/// the router. Any failure here is fatal; nothing is served half-initialized.
pub async fn bootstrap(settings: &Settings) -> anyhow::Result<(DbPool, Router)> {
    let pool = db::init_db_with(&settings.database).await?;
    seed::seed_if_empty(&pool).await?;

    let metrics = MetricsPlugin::new()?;
    let plugins = api_plugins(&pool);
    let plugin_names: Vec<&'static str> = plugins.iter().map(|p| p.name()).collect();
    info!("mounting plugins: {:?}", plugin_names);

    let app = build_app(&plugins, Some(&metrics), &settings.http).await;
    Ok((pool, app))
}
