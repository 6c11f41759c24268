use crate::{
    abstract_trait::menu::DynMenuService,
    domain::{requests::menu::CreateMenuItemRequest, response::menu::MenuItemResponse},
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
use shared::errors::{ErrorResponse, HttpError};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/menus",
    tag = "Menu",
    responses(
        (status = 200, description = "All menu items", body = Vec<MenuItemResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_menus(
    Extension(service): Extension<DynMenuService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all().await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/menus",
    tag = "Menu",
    request_body = CreateMenuItemRequest,
    responses(
        (status = 201, description = "Menu item created", body = MenuItemResponse),
        (status = 400, description = "Validation error"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn create_menu_item(
    Extension(service): Extension<DynMenuService>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateMenuItemRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

pub fn menu_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/menus", get(get_menus))
        .route("/menus", post(create_menu_item))
        .layer(Extension(app_state.di_container.menu_service.clone()))
}
