use crate::config::AppConfig;
use crate::errors::AppError;
use crate::models::audit::AuditLog;
use crate::models::protocol::{RecordStore, StoreError};
use crate::models::table_filter::selection::PagePolicy;

/// Shared, read-only data handed to every handler via `web::Data`.
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: RecordStore,
    pub audit_log: AuditLog,
    pub page_size: usize,
    pub page_policy: PagePolicy,
}

impl AppState {
    pub fn new(store: RecordStore, audit_log: AuditLog, config: &AppConfig) -> Self {
        Self {
            store,
            audit_log,
            page_size: config.page_size.max(1),
            page_policy: config.page_policy,
        }
    }

    /// Load the protocol seed named by the config (or the embedded one) and
    /// the mock audit log.
    pub fn load(config: &AppConfig) -> Result<Self, AppError> {
        let store = RecordStore::load(config.seed_path.as_deref())?;
        let audit_log = AuditLog::embedded().map_err(StoreError::Json)?;
        Ok(Self::new(store, audit_log, config))
    }
}
