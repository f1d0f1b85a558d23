//! Buyer intent and seller presence endpoints

use actix_web::{post, web, HttpResponse};
use serde_json::json;

use crate::error::AppResult;
use crate::models::{BuyerIntentRequest, SellerStatusRequest};
use crate::services::intents::IntentService;
use crate::state::AppState;

#[post("/api/rt/buyer-intent")]
pub async fn buyer_intent(
    state: web::Data<AppState>,
    intent: web::Json<BuyerIntentRequest>,
) -> AppResult<HttpResponse> {
    let intent = intent.into_inner();
    let id = IntentService::record_buyer_intent(&state.db, &intent).await?;

    tracing::info!(
        buyer_id = intent.buyer_id,
        city = %intent.city,
        id,
        "Recorded buyer intent"
    );

    Ok(HttpResponse::Ok().json(json!({ "status": "success", "id": id })))
}

#[post("/api/rt/seller-status")]
pub async fn seller_status(
    state: web::Data<AppState>,
    status: web::Json<SellerStatusRequest>,
) -> AppResult<HttpResponse> {
    let status = status.into_inner();
    IntentService::upsert_seller_status(&state.db, &status).await?;

    tracing::info!(
        seller_id = status.seller_id,
        is_online = status.is_online,
        "Updated seller status"
    );

    Ok(HttpResponse::Ok().json(json!({ "status": "success" })))
}
