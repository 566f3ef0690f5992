//! Debounced scheduling of validation runs.
//!
//! Each external trigger arms a single pending run; a newer trigger for the
//! channel supersedes the pending one instead of stacking delays. Runs are
//! strictly sequential: the loop does not poll for commands while a run is
//! in flight.

use crate::checker::{RequestChecker, RunMode};
use crate::error::{EngineError, Result};
use crate::gateway::Gateway;
use log::{error, info};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time;

/// External events that schedule a validation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// A message was posted in the target channel; checks only the newest
    /// request after a short debounce.
    MessageCreated,
    /// The target channel was opened; batch-checks recent requests after a
    /// settle delay so caches and reactions stabilize first.
    ChannelOpened,
}

enum Command {
    Trigger(Trigger),
    Shutdown,
}

/// Handle to the background check loop.
pub struct CheckScheduler {
    command_tx: mpsc::Sender<Command>,
}

impl CheckScheduler {
    /// Start the scheduler, taking ownership of the checker.
    pub fn start<G: Gateway + 'static>(checker: RequestChecker<G>) -> Self {
        let (command_tx, command_rx) = mpsc::channel(16);
        spawn_check_loop(checker, command_rx);
        Self { command_tx }
    }

    /// Enqueue a trigger; supersedes any pending run.
    pub async fn trigger(&self, trigger: Trigger) -> Result<()> {
        self.command_tx
            .send(Command::Trigger(trigger))
            .await
            .map_err(|_| EngineError::SchedulerClosed)
    }

    /// Stop the background loop. Pending runs are dropped.
    pub async fn shutdown(&self) {
        let _ = self.command_tx.send(Command::Shutdown).await;
    }
}

struct PendingRun {
    mode: RunMode,
    deadline: time::Instant,
}

/// Pure deadline bookkeeping, separate from the loop for testability.
struct SchedulerState {
    debounce: Duration,
    settle: Duration,
    pending: Option<PendingRun>,
}

impl SchedulerState {
    const fn new(debounce: Duration, settle: Duration) -> Self {
        Self {
            debounce,
            settle,
            pending: None,
        }
    }

    /// Arm a run for the trigger, replacing any pending one.
    fn arm(&mut self, trigger: Trigger) {
        let (mode, delay) = match trigger {
            Trigger::MessageCreated => (RunMode::NewestOnly, self.debounce),
            Trigger::ChannelOpened => (RunMode::Batch, self.settle),
        };
        self.pending = Some(PendingRun {
            mode,
            deadline: time::Instant::now() + delay,
        });
    }

    fn next_deadline(&self) -> Option<time::Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    fn take(&mut self) -> Option<RunMode> {
        self.pending.take().map(|p| p.mode)
    }
}

fn spawn_check_loop<G: Gateway + 'static>(
    checker: RequestChecker<G>,
    mut command_rx: mpsc::Receiver<Command>,
) {
    let mut state = SchedulerState::new(checker.config().debounce(), checker.config().settle());

    tokio::spawn(async move {
        loop {
            let deadline = state.next_deadline();

            tokio::select! {
                cmd = command_rx.recv() => {
                    match cmd {
                        Some(Command::Trigger(trigger)) => state.arm(trigger),
                        Some(Command::Shutdown) | None => break,
                    }
                }
                () = async {
                    if let Some(deadline) = deadline {
                        time::sleep_until(deadline).await;
                    }
                }, if deadline.is_some() => {
                    if let Some(mode) = state.take() {
                        match checker.run(mode).await {
                            Ok(stats) => info!("validation run finished: {stats:?}"),
                            Err(err) => error!("validation run failed: {err}"),
                        }
                    }
                }
            }
        }
    });
}
