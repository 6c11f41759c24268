use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynRolloverStore = Arc<dyn RolloverStoreTrait + Send + Sync>;

#[async_trait]
pub trait RolloverStoreTrait {
    /// Deletes every order and sets the sequence back to 0 as one unit.
    /// On error neither change is visible. Safe to repeat.
    ///
    /// Returns the number of deleted orders.
    async fn clear_day(&self) -> Result<u64, RepositoryError>;
}
