use std::sync::Arc;

use tokio::sync::RwLock;

use crate::auth::AuthService;
use crate::config::Config;
use crate::jobs::store::JobStore;
use crate::jobs::view::ViewMode;
use crate::resume::{CannedAnalyzer, ResumeAnalyzer};
use crate::storage::{SlotStorage, StorageError};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Single writer: every mutation holds the write lock across validate, persist and swap.
    pub jobs: Arc<RwLock<JobStore>>,
    /// Board vs. table; process-lifetime UI state, not persisted.
    pub view_mode: Arc<RwLock<ViewMode>>,
    pub auth: Arc<AuthService>,
    /// Pluggable resume analyzer. Default: CannedAnalyzer.
    pub analyzer: Arc<dyn ResumeAnalyzer>,
    pub config: Config,
}

impl AppState {
    pub fn build(config: Config, slots: Arc<dyn SlotStorage>) -> Result<Self, StorageError> {
        let store = JobStore::load(
            slots.clone(),
            config.seed_demo_data,
            config.transition_policy,
        )?;

        Ok(AppState {
            jobs: Arc::new(RwLock::new(store)),
            view_mode: Arc::new(RwLock::new(ViewMode::default())),
            auth: Arc::new(AuthService::new(slots, config.auth_delay)),
            analyzer: Arc::new(CannedAnalyzer::new(config.analysis_delay)),
            config,
        })
    }
}
