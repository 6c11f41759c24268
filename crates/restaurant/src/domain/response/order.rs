use crate::model::order::Order as OrderModel;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: Uuid,
    #[schema(example = "000001")]
    pub order_number: String,
    pub meal_name: String,
    pub side_item: Option<String>,
    pub quantity: i32,
    pub table_number: String,
    pub created_at: String,
}

impl From<OrderModel> for OrderResponse {
    fn from(value: OrderModel) -> Self {
        OrderResponse {
            id: value.id,
            order_number: value.order_number,
            meal_name: value.meal_name,
            side_item: value.side_item,
            quantity: value.quantity,
            table_number: value.table_number,
            created_at: value.created_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfirmation {
    pub message: String,
    #[schema(example = "000001")]
    pub order_number: String,
    pub order: OrderResponse,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderNumberResponse {
    #[schema(example = "000001")]
    pub order_number: String,
}
