//! Shared application state

use std::sync::Arc;

use sqlx::MySqlPool;
use ws_registry::ConnectionRegistry;

use crate::config::Config;
use crate::services::email::EmailService;

#[derive(Clone)]
pub struct AppState {
    pub db: MySqlPool,
    pub registry: ConnectionRegistry,
    pub email: Arc<EmailService>,
    pub config: Arc<Config>,
}
