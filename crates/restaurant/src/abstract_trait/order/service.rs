use crate::domain::{
    requests::order::CreateOrderRequest,
    response::order::{OrderConfirmation, OrderNumberResponse},
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynOrderIntakeService = Arc<dyn OrderIntakeServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderIntakeServiceTrait {
    async fn submit(&self, req: &CreateOrderRequest) -> Result<OrderConfirmation, ServiceError>;
    async fn generate_order_number(&self) -> Result<OrderNumberResponse, ServiceError>;
}
