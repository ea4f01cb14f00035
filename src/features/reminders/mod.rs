//! # Feature: Deadline Reminders
//!
//! Background reminder dispatch for deadline-bearing records. A fixed-cadence
//! scheduler scans unsent candidates, classifies them against the current
//! notification window, emails the ones that are due, and durably flips
//! their sent flag via a conditional update so no recipient is ever notified
//! twice - across restarts, overlapping scans, or transport failures.
//!
//! - **Version**: 2.0.0
//! - **Since**: 0.3.0
//! - **Toggleable**: true
//!
//! ## Changelog
//! - 2.0.0: Unified project/task loops into one tagged-kind candidate with
//!   injectable clock, store, and notifier
//! - 1.2.0: Conditional sent-flag update to guard against double sends
//! - 1.1.0: Task reminder loop alongside project deadlines
//! - 1.0.0: Initial release with the 5-minute project deadline scan

pub mod candidate;
pub mod dispatch;
pub mod scheduler;
pub mod window;

pub use candidate::{ReminderCandidate, ReminderKind};
pub use dispatch::{CycleReport, DispatchEvent, ReminderDispatcher};
pub use scheduler::ReminderScheduler;
pub use window::{evaluate, parse_deadline, tomorrow_window, Eligibility};
