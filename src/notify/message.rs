//! Reminder email construction.

use crate::features::reminders::{parse_deadline, ReminderCandidate, ReminderKind};

/// A rendered reminder email, ready for the transport.
#[derive(Debug, Clone, PartialEq)]
pub struct ReminderEmail {
    pub to: String,
    pub subject: String,
    pub text: String,
    pub html: Option<String>,
}

impl ReminderEmail {
    /// Renders the email for a candidate, or `None` when the candidate has
    /// no usable recipient address.
    pub fn for_candidate(candidate: &ReminderCandidate) -> Option<ReminderEmail> {
        if !candidate.has_recipient() {
            return None;
        }
        let to = candidate.recipient.clone()?;
        let title = &candidate.title;

        let (subject, text, html) = match &candidate.kind {
            ReminderKind::Deadline { deadline } => {
                // Prefer the parsed date for display; fall back to the raw
                // string if the store holds something unexpected.
                let date = parse_deadline(deadline)
                    .map(|instant| instant.format("%Y-%m-%d").to_string())
                    .unwrap_or_else(|_| deadline.trim().to_string());
                (
                    format!("Reminder: Project \"{title}\" deadline is tomorrow!"),
                    format!(
                        "Hey there! Don't forget, your project \"{title}\" is due tomorrow ({date})."
                    ),
                    format!(
                        "<p>Hey there! Don't forget, your project <strong>{title}</strong> is due tomorrow ({date}).</p>"
                    ),
                )
            }
            ReminderKind::Instant { .. } => (
                format!("Reminder: Task \"{title}\" is due!"),
                format!("Hey there! Your task \"{title}\" is due now."),
                format!("<p>Hey there! Your task <strong>{title}</strong> is due now.</p>"),
            ),
        };

        Some(ReminderEmail {
            to,
            subject,
            text,
            html: Some(html),
        })
    }
}
