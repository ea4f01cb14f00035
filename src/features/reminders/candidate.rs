//! Reminder candidate records.
//!
//! Projects carry a `YYYY-MM-DD` deadline string and are reminded the day
//! before the deadline; tasks carry an exact reminder instant and are
//! reminded once it has passed. Both shapes share one lifecycle (unsent →
//! sent), so they are unified under a single record with a tagged kind
//! instead of two parallel dispatch paths.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which window rule applies to a candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReminderKind {
    /// Deadline-dated record. The deadline is kept as the raw string the
    /// CRUD layer stored (`YYYY-MM-DD` or RFC 3339) and parsed at
    /// evaluation time; unparseable values are never eligible.
    Deadline { deadline: String },
    /// Instant-dated record, due once `remind_at` is in the past.
    Instant { remind_at: DateTime<Utc> },
}

/// A record eligible for reminder evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReminderCandidate {
    /// Stable identifier, owned by the record store.
    pub id: String,
    /// Display label used in the notification.
    pub title: String,
    #[serde(flatten)]
    pub kind: ReminderKind,
    /// Destination email address. Candidates without one are never selected.
    pub recipient: Option<String>,
    /// One-shot flag: flipped false → true by the dispatch cycle after a
    /// successful send, never reversed.
    #[serde(default)]
    pub sent: bool,
}

impl ReminderCandidate {
    /// Creates an unsent deadline-based candidate with a fresh id.
    pub fn new_deadline(
        title: impl Into<String>,
        deadline: impl Into<String>,
        recipient: Option<String>,
    ) -> Self {
        ReminderCandidate {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            kind: ReminderKind::Deadline {
                deadline: deadline.into(),
            },
            recipient,
            sent: false,
        }
    }

    /// Creates an unsent instant-based candidate with a fresh id.
    pub fn new_instant(
        title: impl Into<String>,
        remind_at: DateTime<Utc>,
        recipient: Option<String>,
    ) -> Self {
        ReminderCandidate {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            kind: ReminderKind::Instant { remind_at },
            recipient,
            sent: false,
        }
    }

    /// Whether the candidate has a usable destination address.
    pub fn has_recipient(&self) -> bool {
        self.recipient
            .as_deref()
            .map(|r| !r.trim().is_empty())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_candidates_start_unsent() {
        let project =
            ReminderCandidate::new_deadline("Ship v2", "2025-01-11", Some("a@b.c".into()));
        assert!(!project.sent);
        assert!(!project.id.is_empty());

        let task = ReminderCandidate::new_instant(
            "Standup notes",
            "2025-01-10T07:59:00Z".parse().unwrap(),
            Some("a@b.c".into()),
        );
        assert!(!task.sent);
        assert_ne!(project.id, task.id);
    }

    #[test]
    fn test_has_recipient_rejects_missing_and_blank() {
        let mut candidate = ReminderCandidate::new_deadline("Ship v2", "2025-01-11", None);
        assert!(!candidate.has_recipient());

        candidate.recipient = Some(String::new());
        assert!(!candidate.has_recipient());

        candidate.recipient = Some("   ".into());
        assert!(!candidate.has_recipient());

        candidate.recipient = Some("user@example.com".into());
        assert!(candidate.has_recipient());
    }

    #[test]
    fn test_kind_is_tagged_in_json() {
        let candidate =
            ReminderCandidate::new_deadline("Ship v2", "2025-01-11", Some("a@b.c".into()));
        let json = serde_json::to_value(&candidate).unwrap();

        assert_eq!(json["kind"], "deadline");
        assert_eq!(json["deadline"], "2025-01-11");
        assert_eq!(json["sent"], false);
    }
}
