pub mod contact;
pub mod menu;
pub mod order;
pub mod reservation;

use shared::utils::parse_datetime;
use validator::ValidationError;

pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("must not be blank".into()));
    }
    Ok(())
}

pub(crate) fn valid_datetime(value: &str) -> Result<(), ValidationError> {
    match parse_datetime(value) {
        Some(_) => Ok(()),
        None => Err(ValidationError::new("datetime")
            .with_message("must be an RFC 3339 or YYYY-MM-DDTHH:MM date-time".into())),
    }
}
