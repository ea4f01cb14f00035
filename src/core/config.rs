//! Backend configuration loaded from the environment.
//!
//! Variables are read from the process environment after the binary has
//! loaded `config.env` via dotenvy, matching how the rest of the TaskLoad
//! deployment is configured.

use std::time::Duration;

use anyhow::{Context, Result};

/// Default polling cadence for the reminder scheduler (5 minutes).
const DEFAULT_POLL_SECS: u64 = 300;

/// Default per-send HTTP timeout for the mail gateway.
const DEFAULT_MAIL_TIMEOUT_SECS: u64 = 30;

/// Runtime configuration for the reminder backend.
#[derive(Debug, Clone)]
pub struct Config {
    /// How often the scheduler fires a dispatch cycle.
    pub poll_interval: Duration,
    /// Base URL of the mail gateway the notifier posts to.
    pub mail_gateway_url: String,
    /// Bearer token for the mail gateway.
    pub mail_gateway_token: String,
    /// Sender address placed in outgoing reminder emails.
    pub email_from: String,
    /// Upper bound on a single mail-gateway request.
    pub mail_send_timeout: Duration,
    /// Default log filter for env_logger.
    pub log_level: String,
}

impl Config {
    /// Builds a Config from environment variables.
    ///
    /// `MAIL_GATEWAY_URL`, `MAIL_GATEWAY_TOKEN` and `EMAIL_FROM` are
    /// required; everything else has a default.
    pub fn from_env() -> Result<Self> {
        let poll_interval = match std::env::var("REMINDER_POLL_SECS") {
            Ok(raw) => Duration::from_secs(
                raw.parse::<u64>()
                    .with_context(|| format!("invalid REMINDER_POLL_SECS: {raw}"))?,
            ),
            Err(_) => Duration::from_secs(DEFAULT_POLL_SECS),
        };

        let mail_send_timeout = match std::env::var("MAIL_SEND_TIMEOUT_SECS") {
            Ok(raw) => Duration::from_secs(
                raw.parse::<u64>()
                    .with_context(|| format!("invalid MAIL_SEND_TIMEOUT_SECS: {raw}"))?,
            ),
            Err(_) => Duration::from_secs(DEFAULT_MAIL_TIMEOUT_SECS),
        };

        Ok(Config {
            poll_interval,
            mail_gateway_url: std::env::var("MAIL_GATEWAY_URL")
                .context("MAIL_GATEWAY_URL must be set")?,
            mail_gateway_token: std::env::var("MAIL_GATEWAY_TOKEN")
                .context("MAIL_GATEWAY_TOKEN must be set")?,
            email_from: std::env::var("EMAIL_FROM").context("EMAIL_FROM must be set")?,
            mail_send_timeout,
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
