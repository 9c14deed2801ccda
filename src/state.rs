//! Shared application state for request handlers.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::responder::KeywordTable;

/// Shared application state, cloneable across handlers.
///
/// The configuration is behind an `Arc`; the keyword table is static data
/// and copies for free.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub responder: KeywordTable,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
            responder: KeywordTable::builtin(),
        }
    }

    pub fn with_responder(config: AppConfig, responder: KeywordTable) -> Self {
        Self {
            config: Arc::new(config),
            responder,
        }
    }
}
