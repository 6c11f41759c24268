//! Daily order numbers.
//!
//! An order number is the sequence value rendered as a fixed six digit,
//! zero padded string. Once the sequence passes 999999 it wraps back to
//! 000001 and a warning is logged; the daily reset makes this practically
//! unreachable but the behaviour is defined.

use crate::{abstract_trait::sequence::DynSequenceStore, service::bounded};
use shared::errors::ServiceError;
use std::{fmt, str::FromStr, sync::Arc, time::Duration};
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

pub const ORDER_NUMBER_WIDTH: usize = 6;
pub const MAX_ORDER_NUMBER: u32 = 999_999;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OrderNumber(u32);

impl OrderNumber {
    pub fn new(value: u32) -> Option<Self> {
        (1..=MAX_ORDER_NUMBER)
            .contains(&value)
            .then_some(Self(value))
    }

    /// The number issued after `last_issued`.
    pub fn after(last_issued: u32) -> Self {
        if last_issued >= MAX_ORDER_NUMBER {
            Self(1)
        } else {
            Self(last_issued + 1)
        }
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for OrderNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$}", self.0, width = ORDER_NUMBER_WIDTH)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseOrderNumberError {
    #[error("order number must be exactly {ORDER_NUMBER_WIDTH} digits")]
    Format,
    #[error("order number must be between 000001 and 999999")]
    OutOfRange,
}

impl FromStr for OrderNumber {
    type Err = ParseOrderNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != ORDER_NUMBER_WIDTH || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseOrderNumberError::Format);
        }

        let value = s.parse::<u32>().map_err(|_| ParseOrderNumberError::Format)?;
        OrderNumber::new(value).ok_or(ParseOrderNumberError::OutOfRange)
    }
}

/// Issues order numbers from the sequence store.
///
/// Within a process issuance is serialized by a mutex; across processes
/// sharing one store the compare-and-set detects a concurrent writer, in
/// which case the read/compare-and-set pair is retried a bounded number of
/// times.
#[derive(Clone)]
pub struct OrderNumberGenerator {
    store: DynSequenceStore,
    issue_lock: Arc<Mutex<()>>,
    storage_timeout: Duration,
    max_attempts: u32,
}

impl OrderNumberGenerator {
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;

    pub fn new(store: DynSequenceStore, storage_timeout: Duration) -> Self {
        Self {
            store,
            issue_lock: Arc::new(Mutex::new(())),
            storage_timeout,
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub async fn last_issued(&self) -> Result<u32, ServiceError> {
        self.sequence_call("read", async { self.store.read().await })
            .await
    }

    pub async fn issue_next(&self) -> Result<OrderNumber, ServiceError> {
        let _serialized = self.issue_lock.lock().await;

        for attempt in 1..=self.max_attempts {
            match self.try_issue().await {
                Ok(number) => {
                    info!("🔢 Issued order number {number}");
                    return Ok(number);
                }
                Err(ServiceError::SequenceConflict) => {
                    debug!("Order sequence changed concurrently (attempt {attempt}), retrying");
                    tokio::task::yield_now().await;
                }
                Err(e) => return Err(e),
            }
        }

        warn!(
            "⚠️ Order sequence still contended after {} attempts",
            self.max_attempts
        );
        Err(ServiceError::StorageUnavailable(format!(
            "order sequence still contended after {} attempts",
            self.max_attempts
        )))
    }

    async fn try_issue(&self) -> Result<OrderNumber, ServiceError> {
        let current = self.last_issued().await?;
        let next = OrderNumber::after(current);

        if current >= MAX_ORDER_NUMBER {
            warn!("⚠️ Order sequence reached {current}, wrapping to {next}");
        }

        let stored = self
            .sequence_call("compare_and_set", async {
                self.store.compare_and_set(current, next.value()).await
            })
            .await?;

        if stored {
            Ok(next)
        } else {
            Err(ServiceError::SequenceConflict)
        }
    }

    async fn sequence_call<T, F>(&self, operation: &str, fut: F) -> Result<T, ServiceError>
    where
        F: Future<Output = Result<T, shared::errors::RepositoryError>>,
    {
        bounded(self.storage_timeout, operation, fut)
            .await
            .map_err(|e| match e {
                ServiceError::Repo(repo) => {
                    ServiceError::StorageUnavailable(format!("sequence {operation} failed: {repo}"))
                }
                other => other,
            })
    }
}
