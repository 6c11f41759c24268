use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Order {
    pub id: Uuid,
    pub order_number: String,
    pub meal_name: String,
    pub side_item: Option<String>,
    pub quantity: i32,
    pub table_number: String,
    pub created_at: DateTime<Utc>,
}
