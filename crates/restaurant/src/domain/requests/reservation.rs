use super::{not_blank, valid_datetime};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::utils::serde_helpers;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationRequest {
    #[validate(required, length(max = 100), custom(function = "not_blank"))]
    pub firstname: Option<String>,

    #[validate(length(max = 100))]
    pub name: Option<String>,

    #[validate(required, email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[validate(length(max = 30))]
    pub phone: Option<String>,

    #[schema(example = "2026-03-14T19:30")]
    #[validate(required, custom(function = "valid_datetime"))]
    pub date_time: Option<String>,

    #[serde(default, deserialize_with = "serde_helpers::optional_i32")]
    #[validate(required, range(min = 1, max = 50))]
    pub guests: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct CreateReservationRecordRequest {
    pub firstname: String,
    pub name: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub date_time: DateTime<Utc>,
    pub guests: i32,
}
