use super::not_blank;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateMenuItemRequest {
    #[validate(required, length(max = 200), custom(function = "not_blank"))]
    pub name: Option<String>,

    #[validate(required, custom(function = "not_blank"))]
    pub description: Option<String>,

    #[validate(required, range(min = 0.0))]
    pub price: Option<f64>,

    #[validate(required, custom(function = "not_blank"))]
    pub image: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CreateMenuItemRecordRequest {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image: String,
}
