//! Window evaluation for reminder candidates.
//!
//! Pure functions only: given a candidate and a single `now`, decide
//! whether the candidate is due. Deadline-based records are due during the
//! half-open day window `[tomorrow_midnight, day_after_midnight)`;
//! instant-based records are due once their reminder time has passed.
//! Unparseable deadlines are never due (fail-closed) — the caller decides
//! how to log them.

use chrono::{DateTime, Days, NaiveDate, NaiveTime, Utc};

use super::candidate::{ReminderCandidate, ReminderKind};

/// Outcome of evaluating one candidate against the cycle's clock reading.
#[derive(Debug, Clone, PartialEq)]
pub enum Eligibility {
    /// Inside the notification window (or past the reminder instant).
    Due,
    /// Not yet (or no longer) inside the window.
    NotDue,
    /// The stored deadline could not be parsed; excluded from eligibility.
    Malformed(String),
}

/// Computes the half-open "deadline is tomorrow" window for `now`.
///
/// `now` is truncated to the start of its UTC day and advanced by one day;
/// the window closes one day later. The close boundary is exclusive.
pub fn tomorrow_window(now: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
    let tomorrow = (now.date_naive() + Days::new(1))
        .and_time(NaiveTime::MIN)
        .and_utc();
    let day_after = (now.date_naive() + Days::new(2))
        .and_time(NaiveTime::MIN)
        .and_utc();
    (tomorrow, day_after)
}

/// Parses a stored deadline string into an instant.
///
/// Accepts RFC 3339 timestamps and bare `YYYY-MM-DD` dates (interpreted as
/// midnight UTC, which is how the CRUD layer stores project deadlines).
pub fn parse_deadline(raw: &str) -> Result<DateTime<Utc>, String> {
    let raw = raw.trim();

    if let Ok(instant) = raw.parse::<DateTime<Utc>>() {
        return Ok(instant);
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
        .map_err(|e| format!("unparseable deadline {raw:?}: {e}"))
}

/// Classifies a candidate as due or not for the given instant.
pub fn evaluate(candidate: &ReminderCandidate, now: DateTime<Utc>) -> Eligibility {
    match &candidate.kind {
        ReminderKind::Deadline { deadline } => match parse_deadline(deadline) {
            Ok(instant) => {
                let (tomorrow, day_after) = tomorrow_window(now);
                if instant >= tomorrow && instant < day_after {
                    Eligibility::Due
                } else {
                    Eligibility::NotDue
                }
            }
            Err(reason) => Eligibility::Malformed(reason),
        },
        ReminderKind::Instant { remind_at } => {
            if *remind_at <= now {
                Eligibility::Due
            } else {
                Eligibility::NotDue
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    #[test]
    fn test_tomorrow_window_truncates_to_midnight() {
        let (tomorrow, day_after) = tomorrow_window(at("2025-01-10T08:00:00Z"));
        assert_eq!(tomorrow, at("2025-01-11T00:00:00Z"));
        assert_eq!(day_after, at("2025-01-12T00:00:00Z"));

        // Late in the day still maps to the same window
        let (tomorrow, _) = tomorrow_window(at("2025-01-10T23:59:59Z"));
        assert_eq!(tomorrow, at("2025-01-11T00:00:00Z"));
    }

    #[test]
    fn test_deadline_tomorrow_is_due() {
        let candidate = ReminderCandidate::new_deadline(
            "Project A",
            "2025-01-11T00:00:00Z",
            Some("a@b.c".into()),
        );
        assert_eq!(
            evaluate(&candidate, at("2025-01-10T08:00:00Z")),
            Eligibility::Due
        );
    }

    #[test]
    fn test_deadline_at_window_close_is_not_due() {
        // Right-open interval: exactly day-after midnight is excluded
        let candidate = ReminderCandidate::new_deadline(
            "Project B",
            "2025-01-12T00:00:00Z",
            Some("a@b.c".into()),
        );
        assert_eq!(
            evaluate(&candidate, at("2025-01-10T08:00:00Z")),
            Eligibility::NotDue
        );
    }

    #[test]
    fn test_deadline_at_window_open_is_due() {
        let candidate = ReminderCandidate::new_deadline(
            "Boundary",
            "2025-01-11T00:00:00Z",
            Some("a@b.c".into()),
        );
        let (tomorrow, _) = tomorrow_window(at("2025-01-10T16:30:00Z"));
        assert_eq!(parse_deadline("2025-01-11T00:00:00Z").unwrap(), tomorrow);
        assert_eq!(
            evaluate(&candidate, at("2025-01-10T16:30:00Z")),
            Eligibility::Due
        );
    }

    #[test]
    fn test_bare_date_deadline_is_due_day_before() {
        let candidate =
            ReminderCandidate::new_deadline("Project C", "2025-01-11", Some("a@b.c".into()));
        assert_eq!(
            evaluate(&candidate, at("2025-01-10T08:00:00Z")),
            Eligibility::Due
        );
        // Two days out: not yet
        assert_eq!(
            evaluate(&candidate, at("2025-01-09T08:00:00Z")),
            Eligibility::NotDue
        );
        // Day of the deadline: window has passed
        assert_eq!(
            evaluate(&candidate, at("2025-01-11T08:00:00Z")),
            Eligibility::NotDue
        );
    }

    #[test]
    fn test_malformed_deadline_fails_closed() {
        let candidate =
            ReminderCandidate::new_deadline("Broken", "next tuesday", Some("a@b.c".into()));
        match evaluate(&candidate, at("2025-01-10T08:00:00Z")) {
            Eligibility::Malformed(reason) => assert!(reason.contains("next tuesday")),
            other => panic!("expected Malformed, got {other:?}"),
        }
    }

    #[test]
    fn test_instant_due_or_overdue() {
        let now = at("2025-01-10T08:00:00Z");

        let overdue =
            ReminderCandidate::new_instant("Task", at("2025-01-10T07:59:00Z"), Some("a@b.c".into()));
        assert_eq!(evaluate(&overdue, now), Eligibility::Due);

        let exact = ReminderCandidate::new_instant("Task", now, Some("a@b.c".into()));
        assert_eq!(evaluate(&exact, now), Eligibility::Due);

        let future =
            ReminderCandidate::new_instant("Task", at("2025-01-10T08:01:00Z"), Some("a@b.c".into()));
        assert_eq!(evaluate(&future, now), Eligibility::NotDue);
    }
}
