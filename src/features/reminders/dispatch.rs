//! Dispatch cycle orchestration.
//!
//! One cycle is select → evaluate → notify → conditional commit. The cycle
//! captures a single `now` so every candidate is judged against the same
//! window, and no per-candidate failure aborts the rest of the pass.

use std::sync::Arc;

use log::{debug, error, info, warn};
use tokio::sync::mpsc;

use super::candidate::ReminderCandidate;
use super::window::{evaluate, Eligibility};
use crate::core::Clock;
use crate::notify::Notifier;
use crate::store::{ReminderStore, StoreError};

/// Per-candidate outcomes surfaced on the observability channel.
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchEvent {
    /// Notification transmitted and the sent flag committed.
    Sent { id: String, title: String },
    /// Transport reported failure; the candidate stays eligible.
    TransportFailed { id: String },
    /// Send succeeded but the flag commit failed: the candidate may be
    /// notified again on a later cycle.
    DuplicateRisk { id: String },
    /// Stored deadline could not be parsed; excluded fail-closed.
    MalformedDeadline { id: String, reason: String },
    /// End-of-cycle summary.
    CycleCompleted(CycleReport),
}

/// Counters for one dispatch cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CycleReport {
    /// Candidates returned by the selector.
    pub selected: usize,
    /// Successfully sent and committed.
    pub sent: usize,
    /// Transport failures, retried on a later tick.
    pub retried: usize,
    /// Conditional-update guard losses: another worker got there first.
    pub already_handled: usize,
    /// Commits that failed after a successful send (duplicate risk).
    pub update_failures: usize,
    /// Candidates excluded for unparseable deadlines.
    pub malformed: usize,
}

/// Runs dispatch cycles against injected store, notifier and clock.
pub struct ReminderDispatcher {
    store: Arc<dyn ReminderStore>,
    notifier: Arc<dyn Notifier>,
    clock: Arc<dyn Clock>,
    events: Option<mpsc::UnboundedSender<DispatchEvent>>,
}

impl ReminderDispatcher {
    pub fn new(
        store: Arc<dyn ReminderStore>,
        notifier: Arc<dyn Notifier>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        ReminderDispatcher {
            store,
            notifier,
            clock,
            events: None,
        }
    }

    /// Attaches an observability channel. Events are sent non-blocking and
    /// a dropped receiver never affects dispatching.
    pub fn with_events(mut self, events: mpsc::UnboundedSender<DispatchEvent>) -> Self {
        self.events = Some(events);
        self
    }

    fn emit(&self, event: DispatchEvent) {
        if let Some(tx) = &self.events {
            let _ = tx.send(event);
        }
    }

    /// Executes one dispatch cycle.
    ///
    /// A query failure aborts the whole cycle with no side effects; the
    /// scheduler logs it and the next tick retries. Everything after the
    /// query is per-candidate: transport failures and commit failures are
    /// logged and counted but never stop the pass.
    ///
    /// A process crash strictly between a successful send and the flag
    /// commit can produce one duplicate notification after restart; that is
    /// the accepted at-most-once exception.
    pub async fn run_cycle(&self) -> Result<CycleReport, StoreError> {
        let now = self.clock.now();
        let candidates = self.store.unsent_with_recipient().await?;

        let mut report = CycleReport {
            selected: candidates.len(),
            ..Default::default()
        };

        for candidate in &candidates {
            match evaluate(candidate, now) {
                Eligibility::NotDue => {}
                Eligibility::Malformed(reason) => {
                    warn!(
                        "Skipping candidate {} (\"{}\"): {reason}",
                        candidate.id, candidate.title
                    );
                    report.malformed += 1;
                    self.emit(DispatchEvent::MalformedDeadline {
                        id: candidate.id.clone(),
                        reason,
                    });
                }
                Eligibility::Due => self.notify_and_commit(candidate, &mut report).await,
            }
        }

        debug!(
            "Dispatch cycle done: {} selected, {} sent, {} retried, {} already handled, {} update failures, {} malformed",
            report.selected,
            report.sent,
            report.retried,
            report.already_handled,
            report.update_failures,
            report.malformed
        );
        self.emit(DispatchEvent::CycleCompleted(report));
        Ok(report)
    }

    /// Sends one due candidate and commits the sent flag on success.
    async fn notify_and_commit(&self, candidate: &ReminderCandidate, report: &mut CycleReport) {
        if !self.notifier.send(candidate).await {
            warn!(
                "Transport failed for candidate {} (\"{}\"), will retry next cycle",
                candidate.id, candidate.title
            );
            report.retried += 1;
            self.emit(DispatchEvent::TransportFailed {
                id: candidate.id.clone(),
            });
            return;
        }

        // Conditional update is the duplicate-prevention guard: only the
        // first successful flip wins, everyone else sees Ok(false).
        match self.store.mark_sent(&candidate.id).await {
            Ok(true) => {
                info!(
                    "Sent reminder for candidate {} (\"{}\")",
                    candidate.id, candidate.title
                );
                report.sent += 1;
                self.emit(DispatchEvent::Sent {
                    id: candidate.id.clone(),
                    title: candidate.title.clone(),
                });
            }
            Ok(false) => {
                // Not an error: another worker already handled it
                info!(
                    "Candidate {} already marked sent by another worker",
                    candidate.id
                );
                report.already_handled += 1;
            }
            Err(e) => {
                error!(
                    "Sent reminder for candidate {} but failed to commit sent flag ({e}); \
                     duplicate notification possible on a later cycle",
                    candidate.id
                );
                report.update_failures += 1;
                self.emit(DispatchEvent::DuplicateRisk {
                    id: candidate.id.clone(),
                });
            }
        }
    }
}
