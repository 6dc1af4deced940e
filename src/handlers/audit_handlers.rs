use actix_session::Session;
use actix_web::{web, HttpResponse};
use chrono::Local;
use serde::Deserialize;

use crate::errors::{AppError, render};
use crate::models::audit::AuditAction;
use crate::state::AppState;
use crate::templates_structs::{PageContext, AuditListTemplate, AuditRow, ActionOption};

#[derive(Deserialize)]
pub struct AuditQuery {
    action: Option<String>,
}

/// GET /audit
/// Mock activity feed, newest first, optionally narrowed to one action.
pub async fn list(
    state: web::Data<AppState>,
    session: Session,
    query: web::Query<AuditQuery>,
) -> Result<HttpResponse, AppError> {
    let action_filter = query.action.as_deref().and_then(AuditAction::from_key);
    let now = Local::now().naive_local();

    let entries = state
        .audit_log
        .find_filtered(action_filter)
        .into_iter()
        .map(|e| AuditRow::build(e, now))
        .collect();

    let ctx = PageContext::build(&session, "/audit");
    let tmpl = AuditListTemplate {
        ctx,
        entries,
        action_options: ActionOption::all(action_filter),
    };
    render(tmpl)
}
