//! Outbound email delivery
//!
//! Wraps an async SMTP transport. When `SMTP_HOST` is not configured
//! the service runs in no-op mode: sends are logged and reported as
//! successful so the fallback path stays exercisable in development.

use std::sync::Arc;

use lettre::message::{header, Mailbox};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::EmailSettings;
use crate::error::{AppError, AppResult};

pub const BUYER_INTEREST_SUBJECT: &str = "New Buyer Interested!";

pub struct EmailService {
    transport: Option<Arc<AsyncSmtpTransport<Tokio1Executor>>>,
    from: Mailbox,
}

impl EmailService {
    pub fn new(settings: &EmailSettings) -> AppResult<Self> {
        let from: Mailbox = settings
            .smtp_from
            .parse()
            .map_err(|e| AppError::Config(format!("invalid SMTP_FROM address: {e}")))?;

        if settings.smtp_host.is_empty() {
            tracing::warn!("SMTP_HOST not set; email service running in no-op mode");
            return Ok(EmailService {
                transport: None,
                from,
            });
        }

        let mut builder = if settings.use_starttls {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.smtp_host)
                .map_err(|e| AppError::Config(format!("invalid SMTP relay: {e}")))?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&settings.smtp_host)
                .map_err(|e| AppError::Config(format!("invalid SMTP relay: {e}")))?
        }
        .port(settings.smtp_port);

        if let (Some(user), Some(pass)) = (&settings.smtp_username, &settings.smtp_password) {
            builder = builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }

        Ok(EmailService {
            transport: Some(Arc::new(builder.build())),
            from,
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.transport.is_some()
    }

    /// Notify a seller that a buyer searched for a property like theirs.
    pub async fn send_buyer_interest(
        &self,
        recipient: &str,
        location: &str,
        property_type: &str,
    ) -> AppResult<()> {
        let transport = match &self.transport {
            Some(t) => Arc::clone(t),
            None => {
                tracing::info!(
                    %recipient,
                    "Email service running in no-op mode; skipping actual send"
                );
                return Ok(());
            }
        };

        let to: Mailbox = recipient
            .parse()
            .map_err(|e| AppError::Email(format!("invalid recipient address: {e}")))?;

        let message = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(BUYER_INTEREST_SUBJECT)
            .header(header::ContentType::TEXT_PLAIN)
            .body(buyer_interest_body(location, property_type))
            .map_err(|e| AppError::Email(format!("failed to build message: {e}")))?;

        transport
            .send(message)
            .await
            .map_err(|e| AppError::Email(format!("failed to send email: {e}")))?;

        tracing::info!(%recipient, "Sent buyer-interest email");
        Ok(())
    }
}

pub(crate) fn buyer_interest_body(location: &str, property_type: &str) -> String {
    format!(
        "A buyer is looking for a property in {location} ({property_type}). \
         Login to EasySQFT to connect."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop_settings() -> EmailSettings {
        EmailSettings {
            smtp_host: String::new(),
            smtp_port: 587,
            smtp_username: None,
            smtp_password: None,
            smtp_from: "EasySQFT <no-reply@easysqft.com>".to_string(),
            use_starttls: true,
        }
    }

    #[test]
    fn body_names_location_and_type() {
        let body = buyer_interest_body("Austin", "condo");
        assert_eq!(
            body,
            "A buyer is looking for a property in Austin (condo). \
             Login to EasySQFT to connect."
        );
    }

    #[test]
    fn subject_is_stable() {
        assert_eq!(BUYER_INTEREST_SUBJECT, "New Buyer Interested!");
    }

    #[tokio::test]
    async fn noop_mode_reports_success() {
        let email = EmailService::new(&noop_settings()).unwrap();
        assert!(!email.is_enabled());

        email
            .send_buyer_interest("seller@example.com", "Austin", "condo")
            .await
            .unwrap();
    }

    #[test]
    fn configured_host_enables_transport() {
        let mut settings = noop_settings();
        settings.smtp_host = "smtp.example.com".to_string();

        let email = EmailService::new(&settings).unwrap();
        assert!(email.is_enabled());
    }

    #[test]
    fn invalid_from_address_is_rejected() {
        let mut settings = noop_settings();
        settings.smtp_from = "not an address".to_string();

        assert!(EmailService::new(&settings).is_err());
    }
}
