use std::collections::HashMap;

use actix_web::{web, HttpResponse};

use crate::errors::AppError;
use crate::models::protocol;
use crate::models::table_filter::selection::SelectionState;
use crate::state::AppState;

/// GET /api/v1/protocols - One page of protocols.
/// Query params: q, sort, dir, department, page (same as the HTML table).
pub async fn list(
    state: web::Data<AppState>,
    query: web::Query<HashMap<String, String>>,
) -> Result<HttpResponse, AppError> {
    let selection = SelectionState::from_params(&query);
    let page = protocol::find_paginated(state.store.records(), &selection, state.page_size);
    Ok(HttpResponse::Ok().json(page))
}

/// GET /api/v1/departments - Per-department counts and the grand total.
pub async fn departments(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let summary = protocol::department_counts(state.store.records());
    Ok(HttpResponse::Ok().json(summary))
}
