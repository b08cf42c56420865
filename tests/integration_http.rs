mod common;

use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn health_reports_version() -> anyhow::Result<()> {
    let app = common::spawn_app(common::memory_settings()).await?;

    let resp = app.client.get(app.url("/api/health")).send().await?;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.json::<Value>().await?, json!({"ok": true, "version": "0.1.0"}));
    Ok(())
}

#[tokio::test]
async fn cors_allows_configured_origin_only() -> anyhow::Result<()> {
    let app = common::spawn_app(common::memory_settings()).await?;

    let resp = app.client.get(app.url("/api/stories")).header("origin", "http://localhost:5173").send().await?;
    assert_eq!(
        resp.headers().get("access-control-allow-origin").and_then(|v| v.to_str().ok()),
        Some("http://localhost:5173")
    );
    assert_eq!(
        resp.headers().get("access-control-allow-credentials").and_then(|v| v.to_str().ok()),
        Some("true")
    );

    let resp = app.client.get(app.url("/api/stories")).header("origin", "http://evil.test").send().await?;
    assert!(resp.headers().get("access-control-allow-origin").is_none());
    Ok(())
}

#[tokio::test]
async fn public_demo_allows_any_origin() -> anyhow::Result<()> {
    let mut settings = common::memory_settings();
    settings.http.cors = ministories_api::config::CorsPolicy::AnyOrigin;
    let app = common::spawn_app(settings).await?;

    let resp = app
        .client
        .request(reqwest::Method::OPTIONS, app.url("/api/events"))
        .header("origin", "http://anywhere.test")
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type")
        .send()
        .await?;
    assert!(resp.status().is_success());
    assert_eq!(resp.headers().get("access-control-allow-origin").and_then(|v| v.to_str().ok()), Some("*"));
    Ok(())
}

#[tokio::test]
async fn frontend_bundle_serves_assets_and_spa_fallback() -> anyhow::Result<()> {
    let dist = tempfile::tempdir()?;
    std::fs::write(dist.path().join("index.html"), "<html>ministories</html>")?;
    std::fs::create_dir(dist.path().join("assets"))?;
    std::fs::write(dist.path().join("assets").join("app.js"), "console.log('hi')")?;

    let mut settings = common::memory_settings();
    settings.http.static_dir = dist.path().to_path_buf();
    let app = common::spawn_app(settings).await?;

    let resp = app.client.get(app.url("/assets/app.js")).send().await?;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await?, "console.log('hi')");

    for path in ["/", "/analytics", "/some/deep/link"] {
        let resp = app.client.get(app.url(path)).send().await?;
        assert_eq!(resp.status(), StatusCode::OK, "path {path}");
        assert_eq!(resp.text().await?, "<html>ministories</html>");
    }

    // the API keeps priority and its own 404s
    let resp = app.client.get(app.url("/api/stories/999")).send().await?;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let resp = app.client.get(app.url("/api/unknown")).send().await?;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(resp.json::<Value>().await?["code"], "not_found");
    Ok(())
}

#[tokio::test]
async fn without_bundle_unknown_paths_are_404() -> anyhow::Result<()> {
    let app = common::spawn_app(common::memory_settings()).await?;
    let resp = app.client.get(app.url("/analytics")).send().await?;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn metrics_count_api_requests() -> anyhow::Result<()> {
    let app = common::spawn_app(common::memory_settings()).await?;

    app.client.get(app.url("/api/stories")).send().await?;
    app.client.get(app.url("/api/stories/999")).send().await?;

    let resp = app.client.get(app.url("/metrics")).send().await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let text = resp.text().await?;
    assert!(text.contains(r#"requests_total{method="GET",path="stories",status="200"} 1"#));
    assert!(text.contains(r#"requests_total{method="GET",path="stories",status="404"} 1"#));
    Ok(())
}
