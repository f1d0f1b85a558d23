//! Request models

use serde::Deserialize;

/// What a buyer told us they are looking for.
#[derive(Debug, Clone, Deserialize)]
pub struct BuyerIntentRequest {
    pub buyer_id: i64,
    pub city: String,
    pub location_lat: f64,
    pub location_lon: f64,
}

/// A seller flipping their reachability flag.
#[derive(Debug, Clone, Deserialize)]
pub struct SellerStatusRequest {
    pub seller_id: i64,
    pub is_online: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn buyer_intent_parses_geo_fields() {
        let intent: BuyerIntentRequest = serde_json::from_value(json!({
            "buyer_id": 7,
            "city": "Austin",
            "location_lat": 30.2672,
            "location_lon": -97.7431
        }))
        .unwrap();

        assert_eq!(intent.buyer_id, 7);
        assert_eq!(intent.city, "Austin");
        assert_eq!(intent.location_lat, 30.2672);
        assert_eq!(intent.location_lon, -97.7431);
    }

    #[test]
    fn seller_status_requires_boolean_flag() {
        let status: SellerStatusRequest =
            serde_json::from_value(json!({ "seller_id": 5, "is_online": true })).unwrap();
        assert_eq!(status.seller_id, 5);
        assert!(status.is_online);

        let invalid =
            serde_json::from_value::<SellerStatusRequest>(json!({ "seller_id": 5 }));
        assert!(invalid.is_err());
    }
}
