use crate::{
    abstract_trait::reservation::DynReservationService,
    domain::{
        requests::reservation::CreateReservationRequest,
        response::reservation::ReservationConfirmation,
    },
    middleware::validate::SimpleValidatedJson,
    state::AppState,
};
use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse, routing::post};
use shared::errors::{ErrorResponse, HttpError};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/reservations",
    tag = "Reservation",
    request_body = CreateReservationRequest,
    responses(
        (status = 200, description = "Reservation stored", body = ReservationConfirmation),
        (status = 400, description = "Validation error"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn create_reservation(
    Extension(service): Extension<DynReservationService>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateReservationRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create(&body).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn reservation_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/reservations", post(create_reservation))
        .layer(Extension(app_state.di_container.reservation_service.clone()))
}
