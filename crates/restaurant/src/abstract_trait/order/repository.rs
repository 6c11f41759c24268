use crate::{domain::requests::order::CreateOrderRecordRequest, model::order::Order as OrderModel};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynOrderCommandRepository = Arc<dyn OrderCommandRepositoryTrait + Send + Sync>;
pub type DynOrderQueryRepository = Arc<dyn OrderQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait OrderCommandRepositoryTrait {
    /// Fails with `RepositoryError::Conflict` when the order number is taken.
    async fn create_order(
        &self,
        req: &CreateOrderRecordRequest,
    ) -> Result<OrderModel, RepositoryError>;
}

#[async_trait]
pub trait OrderQueryRepositoryTrait {
    async fn exists_by_order_number(&self, order_number: &str) -> Result<bool, RepositoryError>;
}
