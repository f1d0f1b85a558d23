//! Seller listing lookups

use sqlx::MySqlPool;

use crate::error::AppResult;
use crate::models::{SearchCriteria, SellerListing};

pub struct ListingService;

impl ListingService {
    /// Exact-match lookup on location and property type.
    pub async fn find_matches(
        db: &MySqlPool,
        criteria: &SearchCriteria,
    ) -> AppResult<Vec<SellerListing>> {
        let matches = sqlx::query_as::<_, SellerListing>(
            "SELECT id, title, location, `type`, price, email, created_at \
             FROM seller_listings WHERE location = ? AND `type` = ?",
        )
        .bind(&criteria.location)
        .bind(&criteria.property_type)
        .fetch_all(db)
        .await?;

        Ok(matches)
    }
}
