use super::sequence::reset_sequence;
use crate::abstract_trait::rollover::RolloverStoreTrait;
use shared::{config::ConnectionPool, errors::RepositoryError};

use async_trait::async_trait;
use tracing::{error, info};

/// Clears the day inside one transaction, so a crash or restart between the
/// delete and the sequence reset leaves both untouched.
pub struct PostgresRolloverStore {
    db: ConnectionPool,
}

impl PostgresRolloverStore {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RolloverStoreTrait for PostgresRolloverStore {
    async fn clear_day(&self) -> Result<u64, RepositoryError> {
        info!("🧹 Clearing orders and order sequence");

        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let deleted = sqlx::query("DELETE FROM orders")
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                error!("❌ Failed to delete orders: {:?}", e);
                RepositoryError::from(e)
            })?
            .rows_affected();

        // Dropping `tx` on error rolls the delete back.
        reset_sequence(&mut *tx).await?;

        tx.commit().await.map_err(|e| {
            error!("❌ Failed to commit daily rollover: {:?}", e);
            RepositoryError::from(e)
        })?;

        info!("🗑️ Deleted {deleted} orders");
        Ok(deleted)
    }
}
