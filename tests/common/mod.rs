//! Shared test infrastructure.
//!
//! - `fixture_store()` - the embedded 10-record protocol seed
//! - `test_state()` - application state with default config
//! - `test_app()` - full route table behind a cookie session, for `init_service`
#![allow(dead_code)]

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::body::MessageBody;
use actix_web::cookie::Key;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use protodesk::config::AppConfig;
use protodesk::handlers;
use protodesk::models::audit::AuditLog;
use protodesk::models::protocol::{ProtocolRecord, RecordStore};
use protodesk::state::AppState;

// ============================================================================
// FIXTURES
// ============================================================================

pub const FIXTURE_SIZE: usize = 10;
pub const PAGE_SIZE: usize = 7;

pub fn fixture_store() -> RecordStore {
    RecordStore::embedded().expect("embedded seed must load")
}

pub fn titles(records: &[ProtocolRecord]) -> Vec<String> {
    records.iter().map(|r| r.title.clone()).collect()
}

pub fn test_state_with(config: &AppConfig) -> AppState {
    let audit = AuditLog::embedded().expect("embedded audit log must load");
    AppState::new(fixture_store(), audit, config)
}

pub fn test_state() -> AppState {
    test_state_with(&AppConfig::default())
}

// ============================================================================
// HTTP APP
// ============================================================================

/// The same app `main` builds, minus the static file service and access log.
pub fn test_app(
    state: AppState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .wrap(
            SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
                .cookie_secure(false)
                .build(),
        )
        .app_data(web::Data::new(state))
        .configure(handlers::configure)
        .default_service(web::to(handlers::not_found))
}
