use crate::{handlers, state::AppState};
use axum::{
    Router,
    routing::{get, post},
};
use http::HeaderValue;
use http::header::AUTHORIZATION;
use std::iter::once;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::sensitive_headers::SetSensitiveRequestHeadersLayer;
use tracing::warn;

fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|origin| origin == "*") {
        return CorsLayer::permissive();
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

pub fn create_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new().route("/chat", post(handlers::chat::chat));

    Router::new()
        .route("/health", get(|| async { "Working!" }))
        .nest("/api", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(SetSensitiveRequestHeadersLayer::new(once(AUTHORIZATION)))
                .layer(cors_layer(&state.config.server.cors_origins)),
        )
        .with_state(state)
}
