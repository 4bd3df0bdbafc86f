//! Batch scheduler.
//!
//! Runs a batch, waits the configured interval, repeats until the
//! cancellation token fires. Cancelling drops an in-flight batch and its
//! partial results.

use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::batch;
use crate::context::BotContext;

pub struct Scheduler {
    interval: Duration,
}

impl Scheduler {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    /// Loops until `cancel` fires; returns how many iterations finished,
    /// skipped batches included.
    pub async fn run(self, ctx: BotContext, cancel: CancellationToken) -> usize {
        tracing::info!("[Scheduler] Started, interval {:?}", self.interval);
        let mut completed = 0_usize;

        loop {
            tokio::select! {
                () = cancel.cancelled() => break,
                _ = batch::run_batch(&ctx) => completed += 1,
            }

            tracing::info!("[Scheduler] Waiting {:?} until the next batch", self.interval);
            tokio::select! {
                () = cancel.cancelled() => break,
                () = tokio::time::sleep(self.interval) => {},
            }
        }

        tracing::info!("[Scheduler] Stopped after {} batches", completed);
        completed
    }
}
