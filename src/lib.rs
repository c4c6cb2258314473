pub mod classifier;
pub mod config;
pub mod formatter;
pub mod html;
pub mod language;
pub mod rest;
pub mod settings;

use std::time::Instant;

use config::ServiceConfig;

/// Process-wide context shared by route handlers. The service is
/// stateless; this only carries configuration and the start timestamp.
pub struct AppContext {
    pub config: ServiceConfig,
    pub started_at: Instant,
}

impl AppContext {
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            config,
            started_at: Instant::now(),
        }
    }
}
