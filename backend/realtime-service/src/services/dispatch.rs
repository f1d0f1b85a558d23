//! Buyer-interest dispatch
//!
//! Decides who hears about a buyer search or a new property listing:
//! every open WebSocket connection gets the frame, and email serves as
//! the fallback channel when nobody is connected. Notification failure
//! never fails the caller; per-recipient outcomes are reported instead.

use sqlx::MySqlPool;
use ws_registry::{BroadcastReport, ConnectionRegistry};

use crate::error::AppResult;
use crate::models::{PropertyNotice, SearchCriteria, SellerListing, WsOutboundEvent};
use crate::services::email::EmailService;
use crate::services::listings::ListingService;

/// Outcome of one fallback email attempt. Failures are recorded here,
/// never propagated; one bad address must not block the rest.
#[derive(Debug)]
pub struct EmailOutcome {
    pub recipient: String,
    pub error: Option<String>,
}

#[derive(Debug)]
pub struct DispatchReport {
    pub broadcast: BroadcastReport,
    pub emails: Vec<EmailOutcome>,
}

impl DispatchReport {
    pub fn delivered(&self) -> usize {
        self.broadcast.delivered()
    }
}

pub struct DispatchService;

impl DispatchService {
    /// Broadcast a buyer search to connected sellers. When no frame was
    /// delivered and the search produced matches, email each matching
    /// seller that has an address on file.
    pub async fn notify_buyer_search(
        registry: &ConnectionRegistry,
        email: &EmailService,
        criteria: &SearchCriteria,
        matches: &[SellerListing],
    ) -> AppResult<DispatchReport> {
        let payload = WsOutboundEvent::buyer_search(criteria)?.to_payload()?;
        let broadcast = registry.broadcast(&payload).await;

        let emails = if broadcast.delivered() == 0 && !matches.is_empty() {
            tracing::info!(
                matches = matches.len(),
                "No sellers connected; falling back to email"
            );
            send_fallback_emails(email, &criteria.location, &criteria.property_type, matches).await
        } else {
            Vec::new()
        };

        Ok(DispatchReport { broadcast, emails })
    }

    /// Broadcast a newly submitted property to connected sellers. The
    /// email fallback is opt-in here: when enabled and no frame was
    /// delivered, sellers matching the property's location and type are
    /// looked up and emailed.
    pub async fn notify_property(
        registry: &ConnectionRegistry,
        email: &EmailService,
        db: &MySqlPool,
        email_fallback: bool,
        notice: &PropertyNotice,
    ) -> AppResult<DispatchReport> {
        let payload = WsOutboundEvent::buyer_search(notice)?.to_payload()?;
        let broadcast = registry.broadcast(&payload).await;

        let emails = if email_fallback && broadcast.delivered() == 0 {
            let criteria = SearchCriteria {
                location: notice.location.clone(),
                property_type: notice.property_type.clone(),
            };
            let matches = ListingService::find_matches(db, &criteria).await?;
            if matches.is_empty() {
                Vec::new()
            } else {
                tracing::info!(
                    matches = matches.len(),
                    "No sellers connected; falling back to email"
                );
                send_fallback_emails(email, &notice.location, &notice.property_type, &matches)
                    .await
            }
        } else {
            Vec::new()
        };

        Ok(DispatchReport { broadcast, emails })
    }
}

async fn send_fallback_emails(
    email: &EmailService,
    location: &str,
    property_type: &str,
    matches: &[SellerListing],
) -> Vec<EmailOutcome> {
    let mut outcomes = Vec::new();

    for listing in matches {
        let recipient = match listing.email.as_deref() {
            Some(addr) if !addr.is_empty() => addr,
            _ => continue,
        };

        let error = email
            .send_buyer_interest(recipient, location, property_type)
            .await
            .err()
            .map(|e| e.to_string());

        if let Some(err) = &error {
            tracing::error!(%recipient, error = %err, "Fallback email failed");
        }

        outcomes.push(EmailOutcome {
            recipient: recipient.to_string(),
            error,
        });
    }

    outcomes
}
