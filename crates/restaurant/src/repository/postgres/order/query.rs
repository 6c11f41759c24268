use crate::abstract_trait::order::OrderQueryRepositoryTrait;
use shared::{config::ConnectionPool, errors::RepositoryError};

use async_trait::async_trait;
use tracing::error;

pub struct OrderQueryRepository {
    db: ConnectionPool,
}

impl OrderQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderQueryRepositoryTrait for OrderQueryRepository {
    async fn exists_by_order_number(&self, order_number: &str) -> Result<bool, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM orders WHERE order_number = $1)",
        )
        .bind(order_number)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to look up order {order_number}: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok(exists)
    }
}
