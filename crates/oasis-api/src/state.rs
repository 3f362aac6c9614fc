//! # Application State
//!
//! Shared state passed to all route handlers via the `State` extractor.
//! Everything in it is read-only after startup.

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::AppConfig;

#[derive(Debug, Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub catalog: Arc<Catalog>,
}

impl AppState {
    /// State with default configuration.
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    pub fn with_config(config: AppConfig) -> Self {
        let catalog = Arc::new(Catalog::build(config.cursor_items));
        Self { config, catalog }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
