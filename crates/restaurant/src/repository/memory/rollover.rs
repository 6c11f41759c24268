use super::{InMemoryOrderStore, InMemorySequenceStore};
use crate::abstract_trait::{rollover::RolloverStoreTrait, sequence::SequenceStoreTrait};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

/// Resets the sequence first; clearing the in-memory orders cannot fail, so
/// a failed reset leaves the day exactly as it was.
pub struct InMemoryRolloverStore {
    orders: Arc<InMemoryOrderStore>,
    sequence: Arc<InMemorySequenceStore>,
}

impl InMemoryRolloverStore {
    pub fn new(orders: Arc<InMemoryOrderStore>, sequence: Arc<InMemorySequenceStore>) -> Self {
        Self { orders, sequence }
    }
}

#[async_trait]
impl RolloverStoreTrait for InMemoryRolloverStore {
    async fn clear_day(&self) -> Result<u64, RepositoryError> {
        self.sequence.reset().await?;
        Ok(self.orders.clear().await)
    }
}
