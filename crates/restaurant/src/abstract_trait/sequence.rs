use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynSequenceStore = Arc<dyn SequenceStoreTrait + Send + Sync>;

/// Durable holder of the last issued order number.
#[async_trait]
pub trait SequenceStoreTrait {
    async fn read(&self) -> Result<u32, RepositoryError>;

    /// Stores `new_value` only if the current value is still `expected`.
    async fn compare_and_set(&self, expected: u32, new_value: u32)
    -> Result<bool, RepositoryError>;

    /// Sets the sequence back to 0. Only the daily rollover calls this.
    async fn reset(&self) -> Result<(), RepositoryError>;
}
