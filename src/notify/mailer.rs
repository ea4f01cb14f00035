//! HTTP mail gateway client.
//!
//! Posts rendered reminder emails to the deployment's mail gateway as JSON.
//! Every transport fault — connection errors, timeouts, non-2xx responses —
//! maps to a `false` send result so the dispatch cycle can retry the
//! candidate on a later tick.

use anyhow::Result;
use async_trait::async_trait;
use log::{debug, warn};
use serde::Serialize;

use super::message::ReminderEmail;
use super::Notifier;
use crate::core::Config;
use crate::features::reminders::ReminderCandidate;

/// JSON payload accepted by the mail gateway.
#[derive(Serialize)]
struct OutboundEmail<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    html: Option<&'a str>,
}

/// Production [`Notifier`] backed by the HTTP mail gateway.
pub struct MailGatewayNotifier {
    client: reqwest::Client,
    url: String,
    token: String,
    from: String,
}

impl MailGatewayNotifier {
    /// Builds the notifier from config. The per-request timeout bounds each
    /// send so a stalled gateway cannot stall a dispatch cycle forever.
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.mail_send_timeout)
            .build()?;

        Ok(MailGatewayNotifier {
            client,
            url: config.mail_gateway_url.clone(),
            token: config.mail_gateway_token.clone(),
            from: config.email_from.clone(),
        })
    }
}

#[async_trait]
impl Notifier for MailGatewayNotifier {
    async fn send(&self, candidate: &ReminderCandidate) -> bool {
        let Some(email) = ReminderEmail::for_candidate(candidate) else {
            // Selector should never hand us a recipientless candidate
            warn!(
                "Refusing to send reminder for candidate {} without recipient",
                candidate.id
            );
            return false;
        };

        let payload = OutboundEmail {
            from: &self.from,
            to: &email.to,
            subject: &email.subject,
            text: &email.text,
            html: email.html.as_deref(),
        };

        match self
            .client
            .post(&self.url)
            .bearer_auth(&self.token)
            .json(&payload)
            .send()
            .await
        {
            Ok(response) if response.status().is_success() => {
                debug!(
                    "Mail gateway accepted reminder for candidate {} ({})",
                    candidate.id, email.to
                );
                true
            }
            Ok(response) => {
                warn!(
                    "Mail gateway rejected reminder for candidate {}: HTTP {}",
                    candidate.id,
                    response.status()
                );
                false
            }
            Err(e) => {
                warn!(
                    "Failed to reach mail gateway for candidate {}: {e}",
                    candidate.id
                );
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_shape() {
        let payload = OutboundEmail {
            from: "reminders@taskload.app",
            to: "user@example.com",
            subject: "Reminder: Project \"X\" deadline is tomorrow!",
            text: "body",
            html: Some("<p>body</p>"),
        };
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["from"], "reminders@taskload.app");
        assert_eq!(json["to"], "user@example.com");
        assert_eq!(json["html"], "<p>body</p>");
    }

    #[test]
    fn test_payload_omits_missing_html() {
        let payload = OutboundEmail {
            from: "reminders@taskload.app",
            to: "user@example.com",
            subject: "s",
            text: "t",
            html: None,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("html").is_none());
    }
}
