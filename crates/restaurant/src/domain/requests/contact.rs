use super::not_blank;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateContactRequest {
    #[validate(required, length(max = 200), custom(function = "not_blank"))]
    pub name: Option<String>,

    #[validate(required, email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[validate(length(max = 200))]
    pub subject: Option<String>,

    #[validate(required, length(max = 5000), custom(function = "not_blank"))]
    pub message: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CreateContactRecordRequest {
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
}
