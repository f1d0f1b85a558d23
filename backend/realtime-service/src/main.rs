use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};

use realtime_service::config::Config;
use realtime_service::error::{AppError, AppResult};
use realtime_service::routes;
use realtime_service::services::email::EmailService;
use realtime_service::state::AppState;
use realtime_service::{db, logging};
use ws_registry::ConnectionRegistry;

#[actix_web::main]
async fn main() -> AppResult<()> {
    logging::init_tracing();

    let config = Config::from_env()?;
    let bind_addr = config.bind_addr();

    let db = db::init_pool()
        .await
        .map_err(|e| AppError::StartServer(format!("database: {e}")))?;
    let registry = ConnectionRegistry::new();
    let email = Arc::new(EmailService::new(&config.email)?);

    let state = AppState {
        db,
        registry,
        email,
        config: Arc::new(config),
    };

    tracing::info!(%bind_addr, "Starting realtime-service");

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .wrap(cors)
            .app_data(web::Data::new(state.clone()))
            .service(routes::health::live)
            .service(routes::search::search)
            .service(routes::webhook::notify_sellers)
            .service(routes::wsroute::ws_connect)
    })
    .bind(&bind_addr)
    .map_err(|e| AppError::StartServer(e.to_string()))?
    .run()
    .await
    .map_err(|e| AppError::StartServer(e.to_string()))
}
