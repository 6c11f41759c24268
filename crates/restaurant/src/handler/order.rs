use crate::{
    abstract_trait::order::DynOrderIntakeService,
    domain::{
        requests::order::CreateOrderRequest,
        response::order::{OrderConfirmation, OrderNumberResponse},
    },
    middleware::validate::SimpleValidatedJson,
    state::AppState,
};
use axum::{
    Json,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use shared::errors::{ErrorResponse, HttpError, ServiceError};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/generateOrderNumber",
    tag = "Order",
    responses(
        (status = 200, description = "A fresh order number, reserved for a later order", body = OrderNumberResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn generate_order_number(
    Extension(service): Extension<DynOrderIntakeService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = tokio::spawn(async move { service.generate_order_number().await })
        .await
        .map_err(|e| ServiceError::Internal(format!("order number task failed: {e}")))??;

    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/commandes",
    tag = "Order",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order placed", body = OrderConfirmation),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Order number already used", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn create_order(
    Extension(service): Extension<DynOrderIntakeService>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateOrderRequest>,
) -> Result<impl IntoResponse, HttpError> {
    // Detached so that a client hanging up cannot cancel a submission
    // between issuing the number and storing the order.
    let response = tokio::spawn(async move { service.submit(&body).await })
        .await
        .map_err(|e| ServiceError::Internal(format!("order submission task failed: {e}")))??;

    Ok((StatusCode::CREATED, Json(response)))
}

pub fn order_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/generateOrderNumber", get(generate_order_number))
        .route("/commandes", post(create_order))
        .layer(Extension(
            app_state.di_container.order_intake_service.clone(),
        ))
}
