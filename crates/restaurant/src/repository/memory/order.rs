use crate::{
    abstract_trait::order::{OrderCommandRepositoryTrait, OrderQueryRepositoryTrait},
    domain::requests::order::CreateOrderRecordRequest,
    model::order::Order as OrderModel,
};
use async_trait::async_trait;
use chrono::Utc;
use shared::errors::RepositoryError;
use tokio::sync::Mutex;
use uuid::Uuid;

/// Order table with the same uniqueness rule as the `orders_order_number_key`
/// constraint.
#[derive(Debug, Default)]
pub struct InMemoryOrderStore {
    orders: Mutex<Vec<OrderModel>>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored orders sorted by number.
    pub async fn all(&self) -> Vec<OrderModel> {
        let mut orders = self.orders.lock().await.clone();
        orders.sort_by(|a, b| a.order_number.cmp(&b.order_number));
        orders
    }

    /// Returns the number of deleted orders.
    pub async fn clear(&self) -> u64 {
        let mut orders = self.orders.lock().await;
        let deleted = orders.len() as u64;
        orders.clear();
        deleted
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for InMemoryOrderStore {
    async fn create_order(
        &self,
        req: &CreateOrderRecordRequest,
    ) -> Result<OrderModel, RepositoryError> {
        let order_number = req.order_number.to_string();
        let mut orders = self.orders.lock().await;

        if orders.iter().any(|o| o.order_number == order_number) {
            return Err(RepositoryError::Conflict(format!(
                "order number {order_number} already used"
            )));
        }

        let order = OrderModel {
            id: Uuid::new_v4(),
            order_number,
            meal_name: req.meal_name.clone(),
            side_item: req.side_item.clone(),
            quantity: req.quantity,
            table_number: req.table_number.clone(),
            created_at: Utc::now(),
        };
        orders.push(order.clone());

        Ok(order)
    }
}

#[async_trait]
impl OrderQueryRepositoryTrait for InMemoryOrderStore {
    async fn exists_by_order_number(&self, order_number: &str) -> Result<bool, RepositoryError> {
        Ok(self
            .orders
            .lock()
            .await
            .iter()
            .any(|o| o.order_number == order_number))
    }
}
