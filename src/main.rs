use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::{App, HttpServer, middleware, web};

use protodesk::config::AppConfig;
use protodesk::handlers;
use protodesk::state::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = AppConfig::from_env();
    let state = match AppState::load(&config) {
        Ok(s) => s,
        Err(e) => {
            log::error!("{e}");
            return Err(std::io::Error::other(e.to_string()));
        }
    };
    log::info!(
        "Loaded {} protocols, page size {}, page policy {:?}",
        state.store.len(),
        state.page_size,
        state.page_policy
    );

    let secret_key = config.cookie_key();
    let state = web::Data::new(state);

    log::info!("Starting server at http://{}", config.bind);

    HttpServer::new(move || {
        let session_mw = SessionMiddleware::builder(
            CookieSessionStore::default(),
            secret_key.clone(),
        )
        .cookie_secure(false)
        .cookie_http_only(true)
        .build();

        App::new()
            .wrap(session_mw)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            // Static files
            .service(actix_files::Files::new("/static", "./static"))
            .configure(handlers::configure)
            // Default 404 handler (must be registered last)
            .default_service(web::to(handlers::not_found))
    })
    .bind(&config.bind)?
    .run()
    .await
}
