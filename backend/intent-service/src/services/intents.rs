//! Buyer intent and seller presence persistence

use sqlx::MySqlPool;

use crate::error::AppResult;
use crate::models::{BuyerIntentRequest, SellerStatusRequest};

pub struct IntentService;

impl IntentService {
    /// Record what a buyer is looking for. Returns the new row id.
    pub async fn record_buyer_intent(
        db: &MySqlPool,
        intent: &BuyerIntentRequest,
    ) -> AppResult<u64> {
        let result = sqlx::query(
            "INSERT INTO buyer_intents (buyer_id, city, location_lat, location_lon) \
             VALUES (?, ?, ?, ?)",
        )
        .bind(intent.buyer_id)
        .bind(&intent.city)
        .bind(intent.location_lat)
        .bind(intent.location_lon)
        .execute(db)
        .await?;

        Ok(result.last_insert_id())
    }

    /// Record whether a seller is reachable. One row per seller; a
    /// repeated call updates the existing row instead of duplicating it.
    pub async fn upsert_seller_status(
        db: &MySqlPool,
        status: &SellerStatusRequest,
    ) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO seller_status (seller_id, is_online) VALUES (?, ?) \
             ON DUPLICATE KEY UPDATE is_online = ?",
        )
        .bind(status.seller_id)
        .bind(status.is_online)
        .bind(status.is_online)
        .execute(db)
        .await?;

        Ok(())
    }
}
