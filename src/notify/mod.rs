//! # Notification Module
//!
//! Outbound reminder email delivery. The [`Notifier`] trait is the
//! send-and-report-success contract the dispatch cycle consumes; transport
//! details stay behind it. [`MailGatewayNotifier`] is the production
//! implementation, posting to the deployment's HTTP mail gateway.
//!
//! - **Version**: 1.2.0
//! - **Since**: 0.9.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.2.0: Per-send HTTP timeout on the mail gateway client
//! - 1.1.0: Optional HTML bodies
//! - 1.0.0: Initial release with plain-text reminder emails

pub mod mailer;
pub mod message;

pub use mailer::MailGatewayNotifier;
pub use message::ReminderEmail;

use async_trait::async_trait;

use crate::features::reminders::ReminderCandidate;

/// Sends one reminder notification and reports whether it was transmitted.
///
/// Implementations must map ordinary transport failures to `false` rather
/// than panicking or returning an error type; a `false` result leaves the
/// candidate unsent and it is retried on the next scheduler tick. No retry
/// or backoff happens inside the notifier itself.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, candidate: &ReminderCandidate) -> bool;
}
