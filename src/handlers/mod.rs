pub mod api_v1;
pub mod audit_handlers;
pub mod protocol_handlers;
pub mod settings_handlers;

use actix_web::{web, HttpResponse};

/// Register every page and API route. The 404 fallback is attached
/// separately with [`not_found`] since it belongs to the `App`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/protocols", web::get().to(protocol_handlers::list))
        .route("/audit", web::get().to(audit_handlers::list))
        .route("/settings", web::get().to(settings_handlers::list))
        .route("/settings/departments", web::post().to(settings_handlers::add_department))
        .route("/settings/departments/{id}/delete", web::post().to(settings_handlers::delete_department))
        .route("/settings/departments/{id}", web::post().to(settings_handlers::rename_department))
        .route("/settings/statuses", web::post().to(settings_handlers::add_status))
        .route("/settings/statuses/{id}/delete", web::post().to(settings_handlers::delete_status))
        .route("/settings/statuses/{id}", web::post().to(settings_handlers::rename_status))
        .service(web::scope("/api/v1").configure(api_v1::configure));
}

/// GET / - the protocol table is the landing page.
pub async fn index() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", "/protocols"))
        .finish()
}

/// Default service: static 404 page.
pub async fn not_found() -> HttpResponse {
    let html = include_str!("../../templates/errors/404.html");
    HttpResponse::NotFound()
        .content_type("text/html; charset=utf-8")
        .body(html)
}
