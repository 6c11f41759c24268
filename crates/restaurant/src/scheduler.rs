//! Daily rollover: clears the day's orders and restarts the order sequence.
//!
//! Fires once a day at a configured local wall-clock time. A firing missed
//! because the process was down is not caught up on restart.

use crate::{
    abstract_trait::rollover::DynRolloverStore,
    service::{bounded, issuance_gate::IssuanceGate},
};
use chrono::{DateTime, Local, NaiveTime, TimeZone};
use shared::errors::{RepositoryError, ServiceError};
use std::{future::Future, time::Duration};
use tokio::{sync::broadcast, time::sleep};
use tracing::{error, info, warn};

#[derive(Debug, Clone)]
pub struct ResetRetryPolicy {
    pub attempts: u32,
    /// Doubled after every failed attempt.
    pub initial_backoff: Duration,
}

impl Default for ResetRetryPolicy {
    fn default() -> Self {
        Self {
            attempts: 5,
            initial_backoff: Duration::from_millis(500),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RolloverReport {
    pub deleted_orders: u64,
}

pub struct DailyResetSchedulerDeps {
    pub store: DynRolloverStore,
    pub gate: IssuanceGate,
    pub reset_at: NaiveTime,
    pub storage_timeout: Duration,
    pub retry: ResetRetryPolicy,
}

pub struct DailyResetScheduler {
    store: DynRolloverStore,
    gate: IssuanceGate,
    reset_at: NaiveTime,
    storage_timeout: Duration,
    retry: ResetRetryPolicy,
}

impl DailyResetScheduler {
    pub fn new(deps: DailyResetSchedulerDeps) -> Self {
        let DailyResetSchedulerDeps {
            store,
            gate,
            reset_at,
            storage_timeout,
            retry,
        } = deps;

        Self {
            store,
            gate,
            reset_at,
            storage_timeout,
            retry,
        }
    }

    /// Runs until the shutdown channel fires or closes.
    pub async fn run(&self, mut shutdown: broadcast::Receiver<()>) {
        info!("⏰ Daily reset scheduler started (reset at {})", self.reset_at);

        loop {
            let wait = duration_until_next_reset(Local::now(), self.reset_at);
            info!("⏳ Next order reset in {} minutes", wait.as_secs() / 60);

            tokio::select! {
                _ = sleep(wait) => {}
                _ = shutdown.recv() => {
                    info!("🛑 Daily reset scheduler received shutdown signal");
                    return;
                }
            }

            // Failures are logged inside; the next attempt is tomorrow's.
            let _ = self.rollover().await;
        }
    }

    /// Deletes all orders and resets the sequence in one storage operation,
    /// holding the issuance gate exclusively throughout.
    ///
    /// Transient failures are retried with backoff. When every attempt
    /// fails, orders and sequence are both left as they were and numbering
    /// continues from the current value.
    pub async fn rollover(&self) -> Result<RolloverReport, ServiceError> {
        info!("🌙 Starting daily order rollover");

        let _permit = self.gate.enter_rollover().await;

        match self
            .with_backoff("clear_day", || self.store.clear_day())
            .await
        {
            Ok(deleted_orders) => {
                info!("✅ Rollover complete: {deleted_orders} orders cleared, sequence reset");
                Ok(RolloverReport { deleted_orders })
            }
            Err(e) => {
                error!(
                    "💥 Daily rollover failed after {} attempts ({e}); orders and sequence \
                     unchanged, numbering continues until the next reset",
                    self.retry.attempts.max(1)
                );
                Err(e)
            }
        }
    }

    async fn with_backoff<T, F, Fut>(&self, operation: &str, mut call: F) -> Result<T, ServiceError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, RepositoryError>>,
    {
        let attempts = self.retry.attempts.max(1);
        let mut backoff = self.retry.initial_backoff;

        for attempt in 1..=attempts {
            match bounded(self.storage_timeout, operation, call()).await {
                Ok(value) => return Ok(value),
                Err(e) if attempt < attempts => {
                    warn!(
                        "⚠️ {operation} failed (attempt {attempt}/{attempts}): {e}; retrying in {}ms",
                        backoff.as_millis()
                    );
                    sleep(backoff).await;
                    backoff = backoff.saturating_mul(2);
                }
                Err(e) => return Err(e),
            }
        }

        Err(ServiceError::Internal(format!("{operation} was never attempted")))
    }
}

/// Longest local-clock gap a reset time is pushed across.
const MAX_CLOCK_GAP_MINUTES: i64 = 180;

/// Time from `now` until the next occurrence of `reset_at` in `now`'s zone.
///
/// A reset time that does not exist on a given day (DST gap) moves to the
/// first local minute after the gap, so the day's reset still happens.
pub fn duration_until_next_reset<Tz: TimeZone>(now: DateTime<Tz>, reset_at: NaiveTime) -> Duration {
    let tz = now.timezone();
    let today = now.date_naive();

    let target_date = if now.time() >= reset_at {
        today + chrono::Duration::days(1)
    } else {
        today
    };

    let local = target_date.and_time(reset_at);
    let target = (0..=MAX_CLOCK_GAP_MINUTES).find_map(|minutes| {
        tz.from_local_datetime(&(local + chrono::Duration::minutes(minutes)))
            .earliest()
    });

    match target {
        Some(target) => target
            .signed_duration_since(&now)
            .to_std()
            .ok()
            .filter(|d| !d.is_zero())
            .unwrap_or(Duration::from_secs(60)),
        None => {
            error!("❌ Cannot resolve local reset time {reset_at} on {target_date}, retrying in a minute");
            Duration::from_secs(60)
        }
    }
}
