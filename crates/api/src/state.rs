use std::sync::Arc;

use notekeep_core::services::{CascadeDeleter, CategoryService, NoteService};
use notekeep_db::{DbPool, PgStore};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool (health checks).
    pub pool: DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Persistence gateway handed to the integrity services.
    pub store: Arc<PgStore>,
}

impl AppState {
    pub fn new(pool: DbPool, config: ServerConfig) -> Self {
        let store = Arc::new(PgStore::new(pool.clone()));
        Self {
            pool,
            config: Arc::new(config),
            store,
        }
    }

    pub fn categories(&self) -> CategoryService<PgStore> {
        CategoryService::new(Arc::clone(&self.store))
    }

    pub fn notes(&self) -> NoteService<PgStore> {
        NoteService::new(Arc::clone(&self.store))
    }

    pub fn cascade(&self) -> CascadeDeleter<PgStore> {
        CascadeDeleter::new(Arc::clone(&self.store))
    }
}
