use actix_cors::Cors;
use actix_web::{web, App, HttpServer};

use intent_service::config::Config;
use intent_service::error::{AppError, AppResult};
use intent_service::routes;
use intent_service::state::AppState;
use intent_service::{db, logging};
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

    let state = AppState { db, registry };

    tracing::info!(%bind_addr, "Starting intent-service");

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
            .service(routes::intents::buyer_intent)
            .service(routes::intents::seller_status)
            .service(routes::wsroute::ws_connect)
    })
    .bind(&bind_addr)
    .map_err(|e| AppError::StartServer(e.to_string()))?
    .run()
    .await
    .map_err(|e| AppError::StartServer(e.to_string()))
}
