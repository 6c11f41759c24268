use shared::errors::ServiceError;
use std::{sync::Arc, time::Duration};
use tokio::{
    sync::{OwnedRwLockReadGuard, OwnedRwLockWriteGuard, RwLock},
    time::timeout,
};

/// Reader/writer lock between order intake and the daily rollover.
///
/// Intake holds it shared for the whole issue-and-persist step; rollover
/// holds it exclusively, so a reset never interleaves with issuance.
#[derive(Clone)]
pub struct IssuanceGate {
    lock: Arc<RwLock<()>>,
    wait_limit: Duration,
}

pub type IntakePermit = OwnedRwLockReadGuard<()>;
pub type RolloverPermit = OwnedRwLockWriteGuard<()>;

impl IssuanceGate {
    pub fn new(wait_limit: Duration) -> Self {
        Self {
            lock: Arc::new(RwLock::new(())),
            wait_limit,
        }
    }

    /// Shared access for issuance, waiting at most `wait_limit` for a
    /// running rollover.
    pub async fn enter_intake(&self) -> Result<IntakePermit, ServiceError> {
        timeout(self.wait_limit, self.lock.clone().read_owned())
            .await
            .map_err(|_| ServiceError::StorageUnavailable("daily rollover in progress".to_string()))
    }

    /// Exclusive access for the rollover. Waits for in-flight intake to
    /// drain; no deadline.
    pub async fn enter_rollover(&self) -> RolloverPermit {
        self.lock.clone().write_owned().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn intake_is_shared() {
        let gate = IssuanceGate::new(Duration::from_millis(100));

        let first = gate.enter_intake().await.unwrap();
        let second = gate.enter_intake().await.unwrap();
        drop((first, second));
    }

    #[tokio::test(start_paused = true)]
    async fn intake_waits_out_rollover_then_gives_up() {
        let gate = IssuanceGate::new(Duration::from_millis(100));
        let _rollover = gate.enter_rollover().await;

        let err = gate.enter_intake().await.unwrap_err();
        assert!(matches!(err, ServiceError::StorageUnavailable(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn rollover_waits_for_intake_to_drain() {
        let gate = IssuanceGate::new(Duration::from_millis(100));
        let intake = gate.enter_intake().await.unwrap();

        let rollover = tokio::spawn({
            let gate = gate.clone();
            async move { drop(gate.enter_rollover().await) }
        });

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(!rollover.is_finished());

        drop(intake);
        rollover.await.unwrap();
    }
}
