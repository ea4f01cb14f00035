//! Clock abstraction.
//!
//! The dispatch cycle captures "now" exactly once per cycle, so the source
//! of time is injected rather than read from `Utc::now()` inline. Tests use
//! [`FixedClock`] to pin the window without real wall-clock waits.

use chrono::{DateTime, Utc};

/// Provides the current instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock that always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
