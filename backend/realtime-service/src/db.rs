//! Database pool initialization

use db_pool::{create_pool, DbConfig};
use sqlx::MySqlPool;

pub async fn init_pool() -> Result<MySqlPool, sqlx::Error> {
    let config =
        DbConfig::from_env("realtime-service").map_err(|e| sqlx::Error::Configuration(e.into()))?;
    config.log_config();
    create_pool(config).await
}
