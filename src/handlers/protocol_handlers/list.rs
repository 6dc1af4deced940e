use std::collections::HashMap;

use actix_session::Session;
use actix_web::{web, HttpResponse};

use crate::errors::{AppError, render};
use crate::models::protocol;
use crate::models::table_filter::paginate::Pager;
use crate::models::table_filter::protocol_columns;
use crate::models::table_filter::selection::SelectionState;
use crate::state::AppState;
use crate::templates_structs::{
    PageContext, ProtocolListTemplate, ProtocolRow, DepartmentNav, PagerLinks,
    column_headers, search_hidden_fields,
};

/// GET /protocols
/// Protocol table derived from the selection carried in the query string.
pub async fn list(
    state: web::Data<AppState>,
    session: Session,
    query: web::Query<HashMap<String, String>>,
) -> Result<HttpResponse, AppError> {
    let selection = SelectionState::from_params(&query);
    let records = state.store.records();

    let page = protocol::find_paginated(records, &selection, state.page_size);
    let summary = protocol::department_counts(records);
    let pager = Pager::new(page.page, page.per_page, page.total_count);

    let ctx = PageContext::build(&session, "/protocols");
    let tmpl = ProtocolListTemplate {
        ctx,
        search_query: selection.q.clone(),
        hidden_fields: search_hidden_fields(&selection),
        columns: column_headers(&protocol_columns(), &selection, state.page_policy),
        rows: page.items.iter().map(ProtocolRow::from).collect(),
        nav: DepartmentNav::build(&summary, &selection, state.page_policy),
        pager_links: PagerLinks::build(&pager, &selection),
        pager,
    };

    render(tmpl)
}
