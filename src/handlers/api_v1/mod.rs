pub mod protocols;

use actix_web::web;

/// Configure API v1 routes. Read-only: the protocol store never changes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/protocols", web::get().to(protocols::list))
        .route("/departments", web::get().to(protocols::departments));
}
