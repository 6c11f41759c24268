use crate::{
    abstract_trait::order::OrderCommandRepositoryTrait,
    domain::requests::order::CreateOrderRecordRequest, model::order::Order as OrderModel,
};
use shared::{config::ConnectionPool, errors::RepositoryError};

use async_trait::async_trait;
use tracing::{error, info};
use uuid::Uuid;

pub struct OrderCommandRepository {
    db: ConnectionPool,
}

impl OrderCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for OrderCommandRepository {
    async fn create_order(
        &self,
        req: &CreateOrderRecordRequest,
    ) -> Result<OrderModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, OrderModel>(
            r#"
            INSERT INTO orders (id, order_number, meal_name, side_item, quantity, table_number, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, current_timestamp)
            RETURNING id, order_number, meal_name, side_item, quantity, table_number, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(req.order_number.to_string())
        .bind(&req.meal_name)
        .bind(&req.side_item)
        .bind(req.quantity)
        .bind(&req.table_number)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!(
                "❌ Failed to create order {} for table {}: {:?}",
                req.order_number, req.table_number, err
            );
            RepositoryError::from(err)
        })?;

        info!(
            "✅ Created order {} for table {}",
            result.order_number, result.table_number
        );
        Ok(result)
    }
}
