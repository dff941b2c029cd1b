//! Route table, OpenAPI document and HTTP middleware.

use axum::Router;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{drone, media},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Drones API",
        description = "Registration, loading and monitoring of medication delivery drones"
    ),
    tags(
        (name = "drone", description = "Drone registration, loading and queries"),
        (name = "media", description = "Image references for medications")
    )
)]
pub struct ApiDoc;

/// Builds the API routes together with their OpenAPI document.
pub fn router() -> (Router<AppState>, utoipa::openapi::OpenApi) {
    OpenApiRouter::<AppState>::with_openapi(ApiDoc::openapi())
        .routes(routes!(drone::register_drone))
        .routes(routes!(drone::get_available_drones))
        .routes(routes!(drone::load_drone, drone::get_loaded_medications))
        .routes(routes!(drone::get_battery_level))
        .routes(routes!(drone::get_battery_audits))
        .routes(routes!(media::register_media))
        .split_for_parts()
}

/// Creates the complete application with Swagger UI and middleware applied.
pub fn app(state: AppState) -> Router {
    let (api, openapi) = router();

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    api.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
