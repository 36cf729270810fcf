use std::sync::Arc;

use casedesk_store::CaseStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// The in-memory case repository.
    pub store: Arc<CaseStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
