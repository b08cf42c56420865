use std::sync::Arc;
use std::time::Instant;

use axum::extract::Request;
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::{routing::get, Router};
use prometheus::{Encoder, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder};

use crate::http_error::AppError;

#[derive(Clone)]
pub struct MetricsPlugin {
    registry: Arc<Registry>,
    pub request_counter: Arc<IntCounterVec>,
    pub request_duration: Arc<HistogramVec>,
}

impl MetricsPlugin {
    pub fn new() -> prometheus::Result<Self> {
        let registry = Registry::new();
        let counter = IntCounterVec::new(Opts::new("requests_total", "Total HTTP requests"), &["method", "path", "status"])?;
        registry.register(Box::new(counter.clone()))?;

        let hist_opts = HistogramOpts::new("request_duration_seconds", "HTTP request latencies in seconds");
        let histogram = HistogramVec::new(hist_opts, &["method", "path"])?;
        registry.register(Box::new(histogram.clone()))?;

        #[cfg(target_os = "linux")]
        {
            let collector = prometheus::process_collector::ProcessCollector::for_self();
            registry.register(Box::new(collector)).ok();
        }

        Ok(MetricsPlugin {
            registry: Arc::new(registry),
            request_counter: Arc::new(counter),
            request_duration: Arc::new(histogram),
        })
    }

    /// Wraps a plugin router so every request it serves is counted under `label`.
    pub fn instrument(&self, router: Router, label: &'static str) -> Router {
        let metrics = self.clone();
        router.layer(middleware::from_fn(move |req: Request, next: Next| {
            let metrics = metrics.clone();
            async move { metrics.track(label, req, next).await }
        }))
    }

    async fn track(&self, label: &'static str, req: Request, next: Next) -> Response {
        let method = req.method().to_string();
        let started = Instant::now();
        let resp = next.run(req).await;
        let status = resp.status().as_u16().to_string();
        self.request_counter.with_label_values(&[method.as_str(), label, status.as_str()]).inc();
        self.request_duration
            .with_label_values(&[method.as_str(), label])
            .observe(started.elapsed().as_secs_f64());
        resp
    }

    pub fn render(&self) -> Result<String, AppError> {
        let mut buffer = Vec::new();
        TextEncoder::new()
            .encode(&self.registry.gather(), &mut buffer)
            .map_err(|e| AppError::from((StatusCode::INTERNAL_SERVER_ERROR, format!("metrics encode error: {}", e))))?;
        String::from_utf8(buffer).map_err(|e| AppError::from((StatusCode::INTERNAL_SERVER_ERROR, e.to_string())))
    }

    pub fn router(&self) -> Router {
        let metrics = self.clone();
        Router::new().route("/", get(move || {
            let metrics = metrics.clone();
            async move { metrics.render() }
        }))
    }
}
