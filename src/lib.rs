pub mod config;
pub mod db;
pub mod http_error;
pub mod kernel;
pub mod plugins;
pub mod seed;

pub use crate::db::*;
pub use crate::kernel::*;

use tracing_subscriber::EnvFilter;

/// Installs the fmt subscriber, honouring `RUST_LOG` and defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
