//! Shared application state

use sqlx::MySqlPool;
use ws_registry::ConnectionRegistry;

#[derive(Clone)]
pub struct AppState {
    pub db: MySqlPool,
    pub registry: ConnectionRegistry,
}
