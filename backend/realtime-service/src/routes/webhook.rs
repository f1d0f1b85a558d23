//! Third-party property webhook

use actix_web::{post, web, HttpResponse};
use serde_json::json;

use crate::models::PropertySubmission;
use crate::services::dispatch::DispatchService;
use crate::state::AppState;

/// Accept a property submission, normalize its field aliases and
/// broadcast it to connected sellers. The email fallback only runs
/// when enabled in the configuration.
#[post("/notify-sellers")]
pub async fn notify_sellers(
    state: web::Data<AppState>,
    submission: web::Json<PropertySubmission>,
) -> HttpResponse {
    let notice = submission.into_inner().into_notice();

    let result = DispatchService::notify_property(
        &state.registry,
        &state.email,
        &state.db,
        state.config.webhook_email_fallback,
        &notice,
    )
    .await;

    match result {
        Ok(report) => {
            tracing::info!(
                title = %notice.title,
                location = %notice.location,
                property_type = %notice.property_type,
                delivered = report.delivered(),
                fallback_emails = report.emails.len(),
                "Notified sellers about property"
            );
            HttpResponse::Ok().json(json!({ "status": "notified", "property": notice }))
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to notify sellers about property");
            HttpResponse::InternalServerError()
                .json(json!({ "status": "error", "error": e.public_message() }))
        }
    }
}
