//! Request, response and wire models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// What a buyer is looking for. The wire field is `type`, which is a
/// keyword in Rust, so the struct field carries a rename.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchCriteria {
    pub location: String,
    #[serde(rename = "type")]
    pub property_type: String,
}

/// A row from `seller_listings`.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct SellerListing {
    pub id: i64,
    pub title: Option<String>,
    pub location: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub property_type: String,
    pub price: Option<f64>,
    pub email: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub matches: Vec<SellerListing>,
}

/// Raw webhook body from the property partner. Every field is optional
/// because partners disagree on naming; [`PropertySubmission::into_notice`]
/// applies the precedence rules.
#[derive(Debug, Clone, Deserialize)]
pub struct PropertySubmission {
    pub title: Option<String>,
    pub property_title: Option<String>,
    pub location: Option<String>,
    pub property_location: Option<String>,
    pub r#type: Option<String>,
    pub property_type: Option<String>,
    pub price: Option<f64>,
}

impl PropertySubmission {
    /// Normalize into a [`PropertyNotice`]. Generic names win for title
    /// and location; the prefixed `property_type` wins over `type`.
    /// Missing strings become empty, missing price becomes zero.
    pub fn into_notice(self) -> PropertyNotice {
        PropertyNotice {
            title: self.title.or(self.property_title).unwrap_or_default(),
            location: self.location.or(self.property_location).unwrap_or_default(),
            property_type: self.property_type.or(self.r#type).unwrap_or_default(),
            price: self.price.unwrap_or(0.0),
        }
    }
}

/// Normalized property announcement, broadcast to sellers and echoed
/// back to the webhook caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyNotice {
    pub title: String,
    pub location: String,
    #[serde(rename = "type")]
    pub property_type: String,
    pub price: f64,
}

/// Frames pushed to connected sellers. Tagged so clients can dispatch
/// on the `type` field.
#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum WsOutboundEvent {
    #[serde(rename = "buyer-search")]
    BuyerSearch { criteria: serde_json::Value },
}

impl WsOutboundEvent {
    pub fn buyer_search<T: Serialize>(criteria: &T) -> Result<Self, serde_json::Error> {
        Ok(WsOutboundEvent::BuyerSearch {
            criteria: serde_json::to_value(criteria)?,
        })
    }

    pub fn to_payload(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
