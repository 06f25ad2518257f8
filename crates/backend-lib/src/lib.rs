// ============================
// crates/backend-lib/src/lib.rs
// ============================
//! Core backend-lib functionality for the coursebook server.

pub mod auth;
pub mod catalog;
pub mod config;
pub mod error;
pub mod handlers;
pub mod messages;
pub mod router;

use std::sync::Arc;

use crate::auth::{AuthService, CredentialStore, DefaultAuth};
use crate::catalog::ContentCatalog;
use crate::config::Settings;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Authentication service
    pub auth: Arc<dyn AuthService>,
    /// Course content catalog
    pub catalog: Arc<ContentCatalog>,
    /// Settings manager
    pub settings: Arc<Settings>,
}

impl AppState {
    /// Create a new application state.
    ///
    /// Seeds the default admin record, so the store is ready to serve
    /// logins as soon as the router goes up.
    pub async fn new(settings: Settings) -> anyhow::Result<Self> {
        let store = CredentialStore::new();
        store.seed_default().await?;

        Ok(Self {
            auth: Arc::new(DefaultAuth::new(store)),
            catalog: Arc::new(ContentCatalog::with_sample_courses()),
            settings: Arc::new(settings),
        })
    }
}
