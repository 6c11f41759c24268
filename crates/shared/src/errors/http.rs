use crate::errors::{ErrorResponse, repository::RepositoryError, service::ServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    Internal(String),
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(errors) => HttpError::BadRequest(errors.join("; ")),

            ServiceError::Repo(repo_err) => match repo_err {
                RepositoryError::NotFound => HttpError::NotFound("Not found".into()),
                RepositoryError::Conflict(msg) => HttpError::Conflict(msg),
                other => {
                    error!("❌ Repository failure: {other}");
                    HttpError::Internal("Storage unavailable, please retry".into())
                }
            },

            ServiceError::StorageUnavailable(msg) => {
                error!("❌ Storage unavailable: {msg}");
                HttpError::Internal("Storage unavailable, please retry".into())
            }

            ServiceError::SequenceConflict => {
                HttpError::Internal("Order number could not be issued, please retry".into())
            }

            ServiceError::Internal(msg) => {
                error!("❌ Internal error: {msg}");
                HttpError::Internal("Internal server error".into())
            }
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            HttpError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            HttpError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            HttpError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse {
            status: "error".into(),
            message: msg,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_is_bad_request() {
        let response =
            HttpError::from(ServiceError::validation("mealName: required")).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn storage_failures_are_server_errors() {
        let response =
            HttpError::from(ServiceError::StorageUnavailable("timeout".into())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = HttpError::from(ServiceError::Repo(RepositoryError::Unavailable(
            "pool closed".into(),
        )))
        .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn duplicate_is_conflict() {
        let response = HttpError::from(ServiceError::Repo(RepositoryError::Conflict(
            "order number already used".into(),
        )))
        .into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }
}
