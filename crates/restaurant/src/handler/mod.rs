mod contact;
mod menu;
mod order;
mod reservation;

use crate::{config::CorsOrigins, state::AppState};
use anyhow::{Context, Result};
use axum::{
    Router,
    extract::{DefaultBodyLimit, State},
    http::{HeaderValue, Method, StatusCode, header::CONTENT_TYPE},
    response::IntoResponse,
    routing::get,
};
use prometheus_client::encoding::text::encode;
use std::sync::Arc;
use tokio::{net::TcpListener, sync::broadcast};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};
use tracing::{info, warn};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub use self::contact::contact_routes;
pub use self::menu::menu_routes;
pub use self::order::order_routes;
pub use self::reservation::reservation_routes;

#[derive(OpenApi)]
#[openapi(
    paths(
        menu::get_menus,
        menu::create_menu_item,

        contact::create_contact,

        reservation::create_reservation,

        order::generate_order_number,
        order::create_order,
    ),
    tags(
        (name = "Menu", description = "Menu endpoints"),
        (name = "Contact", description = "Contact form endpoints"),
        (name = "Reservation", description = "Table reservation endpoints"),
        (name = "Order", description = "Order intake endpoints"),
    )
)]
struct ApiDoc;

const MAX_BODY_BYTES: usize = 1024 * 1024;

pub async fn metrics_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let mut buffer = String::new();

    let registry = state.registry.lock().await;

    if let Err(e) = encode(&mut buffer, &registry) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to encode metrics: {e}"),
        )
            .into_response();
    }

    (
        StatusCode::OK,
        [(
            CONTENT_TYPE,
            "application/openmetrics-text; version=1.0.0; charset=utf-8",
        )],
        buffer,
    )
        .into_response()
}

fn cors_layer(origins: &CorsOrigins) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE]);

    match origins {
        CorsOrigins::Any => layer.allow_origin(Any),
        CorsOrigins::List(list) => {
            let allowed: Vec<HeaderValue> = list
                .iter()
                .filter_map(|origin| match origin.parse::<HeaderValue>() {
                    Ok(value) => Some(value),
                    Err(_) => {
                        warn!("⚠️ Ignoring invalid CORS origin {origin:?}");
                        None
                    }
                })
                .collect();
            layer.allow_origin(AllowOrigin::list(allowed))
        }
    }
}

pub struct AppRouter;

impl AppRouter {
    /// The complete application, without a listener.
    pub fn build(app_state: AppState, cors: &CorsOrigins) -> Router {
        let shared_state = Arc::new(app_state);

        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .route("/metrics", get(metrics_handler))
            .with_state(shared_state.clone())
            .merge(menu_routes(shared_state.clone()))
            .merge(contact_routes(shared_state.clone()))
            .merge(reservation_routes(shared_state.clone()))
            .merge(order_routes(shared_state.clone()));

        let router_with_layers = api_router
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES));

        let (app_router, api) = router_with_layers.split_for_parts();

        app_router
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
            .layer(cors_layer(cors))
            .layer(TraceLayer::new_for_http())
    }

    pub async fn serve(
        port: u16,
        app_state: AppState,
        cors: &CorsOrigins,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<()> {
        let app = Self::build(app_state, cors);

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind {addr}"))?;

        info!("🚀 Server running on http://{}", listener.local_addr()?);
        info!("📖 Swagger UI: http://localhost:{port}/swagger-ui");
        info!("📊 Metrics: http://localhost:{port}/metrics");

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                info!("🛑 HTTP server draining connections");
            })
            .await
            .context("HTTP server failed")?;

        Ok(())
    }
}
