use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Reservation {
    pub id: Uuid,
    pub firstname: String,
    pub name: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub date_time: DateTime<Utc>,
    pub guests: i32,
    pub created_at: DateTime<Utc>,
}
