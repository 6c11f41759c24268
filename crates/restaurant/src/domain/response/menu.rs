use crate::model::menu::MenuItem as MenuItemModel;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MenuItemResponse {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image: String,
}

impl From<MenuItemModel> for MenuItemResponse {
    fn from(value: MenuItemModel) -> Self {
        MenuItemResponse {
            id: value.id,
            name: value.name,
            description: value.description,
            price: value.price,
            image: value.image,
        }
    }
}
