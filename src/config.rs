use std::path::PathBuf;

use anyhow::Context;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://ministories.db";
pub const DEFAULT_CORS_ORIGINS: [&str; 2] = ["http://localhost:5173", "http://localhost:8000"];
pub const DEFAULT_STATIC_DIR: &str = "apps/playground/dist";

#[derive(Debug, Clone)]
pub struct Settings {
    pub database: DatabaseSettings,
    pub http: HttpSettings,
}

#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: 5,
        }
    }
}

/// Which origins may call the API from a browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsPolicy {
    /// Listed origins only, credentials allowed.
    AllowList(Vec<String>),
    /// Any origin, no credentials. Used for the hosted public demo.
    AnyOrigin,
}

#[derive(Debug, Clone)]
pub struct HttpSettings {
    pub host: String,
    pub port: u16,
    pub cors: CorsPolicy,
    /// Directory holding the built single-page frontend. Only served when it
    /// contains an `index.html`.
    pub static_dir: PathBuf,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            cors: CorsPolicy::AllowList(DEFAULT_CORS_ORIGINS.iter().map(|s| s.to_string()).collect()),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}

impl HttpSettings {
    pub fn index_file(&self) -> Option<PathBuf> {
        let index = self.static_dir.join("index.html");
        index.is_file().then_some(index)
    }
}

impl Settings {
    /// Reads settings from the process environment. Call `dotenvy::dotenv()`
    /// first if a `.env` file should be honoured.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(get: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| get(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let mut database = DatabaseSettings::default();
        if let Some(url) = get("DATABASE_URL") {
            database.url = url;
        }
        if let Some(raw) = get("DB_MAX_CONNECTIONS") {
            database.max_connections = raw
                .parse()
                .with_context(|| format!("invalid DB_MAX_CONNECTIONS: {raw}"))?;
        }

        let mut http = HttpSettings::default();
        if let Some(host) = get("HOST") {
            http.host = host;
        }
        if let Some(raw) = get("PORT") {
            http.port = raw.parse().with_context(|| format!("invalid PORT: {raw}"))?;
        }
        if let Some(dir) = get("STATIC_DIR") {
            http.static_dir = PathBuf::from(dir);
        }

        let public_demo = get("PUBLIC_DEMO").map(|v| is_truthy(&v)).unwrap_or(false);
        http.cors = if public_demo {
            CorsPolicy::AnyOrigin
        } else if let Some(raw) = get("CORS_ORIGINS") {
            CorsPolicy::AllowList(
                raw.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect(),
            )
        } else {
            http.cors
        };

        Ok(Self { database, http })
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(value.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}
