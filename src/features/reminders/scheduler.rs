//! Reminder scheduler lifecycle.
//!
//! One background task owns the periodic driver: Idle while waiting on the
//! ticker, Running while a dispatch cycle is in flight, Stopped once the
//! shutdown signal has been observed. Cycles execute inline in the task, so
//! two cycles can never overlap; ticks that land while a cycle is running
//! are dropped, never queued. A stop request is only observed between
//! cycles, which lets an in-flight cycle run to completion instead of
//! leaving a candidate notified-but-unflagged.

use std::time::Duration;

use log::{debug, error, info};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use super::dispatch::ReminderDispatcher;

/// Handle to the running reminder scheduler.
pub struct ReminderScheduler {
    shutdown_tx: watch::Sender<bool>,
    handle: JoinHandle<()>,
}

impl ReminderScheduler {
    /// Spawns the scheduler task, firing a dispatch cycle every
    /// `poll_interval`. The first cycle runs one full interval after start.
    pub fn start(dispatcher: ReminderDispatcher, poll_interval: Duration) -> Self {
        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(poll_interval);
            // Ticks missed while a cycle runs are dropped, not queued
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // tokio intervals fire immediately; consume that tick so the
            // cadence starts one interval from now, like the original cron
            ticker.tick().await;

            info!(
                "Reminder scheduler started (polling every {}s)",
                poll_interval.as_secs_f64()
            );

            loop {
                tokio::select! {
                    _ = shutdown_rx.changed() => {
                        if *shutdown_rx.borrow() {
                            break;
                        }
                    }
                    _ = ticker.tick() => {
                        debug!("Scheduler tick: starting dispatch cycle");
                        match dispatcher.run_cycle().await {
                            Ok(report) => {
                                if report.selected > 0 {
                                    info!(
                                        "Dispatch cycle: {} candidate(s), {} sent",
                                        report.selected, report.sent
                                    );
                                }
                            }
                            Err(e) => {
                                // No side effects happened; next tick retries
                                error!("Dispatch cycle aborted: {e}");
                            }
                        }
                    }
                }
            }

            info!("Reminder scheduler stopped");
        });

        ReminderScheduler {
            shutdown_tx,
            handle,
        }
    }

    /// Signals the scheduler to stop after any in-flight cycle finishes.
    pub fn request_stop(&self) {
        // ignore send error: the task may already have exited
        let _ = self.shutdown_tx.send(true);
    }

    /// Stops the scheduler and waits for the task to finish. Any cycle in
    /// flight completes first.
    pub async fn stop(self) {
        self.request_stop();
        let _ = self.handle.await;
    }
}
