pub mod analytics;
pub mod events;
pub mod health;
pub mod metrics;
pub mod stories;
