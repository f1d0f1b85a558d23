//! Buyer search endpoint

use actix_web::{post, web, HttpResponse};

use crate::error::AppResult;
use crate::models::{SearchCriteria, SearchResponse};
use crate::services::dispatch::DispatchService;
use crate::services::listings::ListingService;
use crate::state::AppState;

/// Look up matching seller listings, then notify sellers over
/// WebSocket with email as fallback. Notification outcome never
/// changes the HTTP response; the buyer always gets the matches.
#[post("/search")]
pub async fn search(
    state: web::Data<AppState>,
    criteria: web::Json<SearchCriteria>,
) -> AppResult<HttpResponse> {
    let criteria = criteria.into_inner();
    let matches = ListingService::find_matches(&state.db, &criteria).await?;

    let report =
        DispatchService::notify_buyer_search(&state.registry, &state.email, &criteria, &matches)
            .await?;

    tracing::info!(
        location = %criteria.location,
        property_type = %criteria.property_type,
        matches = matches.len(),
        delivered = report.delivered(),
        fallback_emails = report.emails.len(),
        "Processed buyer search"
    );

    Ok(HttpResponse::Ok().json(SearchResponse { matches }))
}
