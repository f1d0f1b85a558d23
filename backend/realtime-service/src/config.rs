//! Configuration management for the realtime service

use crate::error::{AppError, AppResult};

/// SMTP transport settings. An empty `SMTP_HOST` leaves the email
/// channel in no-op mode, which keeps local development working
/// without a mail relay.
#[derive(Debug, Clone)]
pub struct EmailSettings {
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_username: Option<String>,
    pub smtp_password: Option<String>,
    pub smtp_from: String,
    pub use_starttls: bool,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub email: EmailSettings,
    /// When set, /notify-sellers falls back to email for matching
    /// sellers if nobody is connected. Off by default so a webhook
    /// burst cannot turn into an email burst.
    pub webhook_email_fallback: bool,
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let port = std::env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3000);

        let email = EmailSettings {
            smtp_host: std::env::var("SMTP_HOST").unwrap_or_default(),
            smtp_port: std::env::var("SMTP_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(587),
            smtp_username: std::env::var("SMTP_USERNAME")
                .ok()
                .filter(|v| !v.is_empty()),
            smtp_password: std::env::var("SMTP_PASSWORD")
                .ok()
                .filter(|v| !v.is_empty()),
            smtp_from: std::env::var("SMTP_FROM")
                .unwrap_or_else(|_| "EasySQFT <no-reply@easysqft.com>".to_string()),
            use_starttls: parse_bool_env("SMTP_USE_STARTTLS", true),
        };

        if email.smtp_port == 0 {
            return Err(AppError::Config("SMTP_PORT must be non-zero".to_string()));
        }

        Ok(Config {
            port,
            email,
            webhook_email_fallback: parse_bool_env("WEBHOOK_EMAIL_FALLBACK", false),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

fn parse_bool_env(name: &str, default: bool) -> bool {
    std::env::var(name)
        .ok()
        .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
        .unwrap_or(default)
}
