use crate::service::order_number::OrderNumber;
use super::not_blank;
use serde::{Deserialize, Serialize};
use shared::utils::serde_helpers;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    #[validate(required, length(max = 200), custom(function = "not_blank"))]
    pub meal_name: Option<String>,

    /// Drink or side ordered with the meal. `softDrink` is accepted as an alias.
    #[serde(alias = "softDrink")]
    #[validate(length(max = 200))]
    pub side_item: Option<String>,

    #[serde(default, deserialize_with = "serde_helpers::optional_i32")]
    #[validate(required, range(min = 1, max = 1000))]
    pub quantity: Option<i32>,

    #[serde(default, deserialize_with = "serde_helpers::optional_string")]
    #[validate(required, length(max = 20), custom(function = "not_blank"))]
    pub table_number: Option<String>,

    /// A number previously obtained from `GET /generateOrderNumber`.
    #[schema(example = "000042")]
    pub order_number: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CreateOrderRecordRequest {
    pub order_number: OrderNumber,
    pub meal_name: String,
    pub side_item: Option<String>,
    pub quantity: i32,
    pub table_number: String,
}
