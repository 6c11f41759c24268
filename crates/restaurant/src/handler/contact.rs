use crate::{
    abstract_trait::contact::DynContactService,
    domain::{requests::contact::CreateContactRequest, response::contact::ContactConfirmation},
    middleware::validate::SimpleValidatedJson,
    state::AppState,
};
use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse, routing::post};
use shared::errors::{ErrorResponse, HttpError};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/contacts",
    tag = "Contact",
    request_body = CreateContactRequest,
    responses(
        (status = 200, description = "Contact message stored", body = ContactConfirmation),
        (status = 400, description = "Validation error"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn create_contact(
    Extension(service): Extension<DynContactService>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateContactRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create(&body).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn contact_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/contacts", post(create_contact))
        .layer(Extension(app_state.di_container.contact_service.clone()))
}
