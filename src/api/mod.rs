use std::sync::Arc;

use axum::http::{header, HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::config::RelayConfig;
use crate::upstream::UpstreamClient;

pub mod handlers;
pub mod types;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<RelayConfig>,
    pub upstream: Arc<dyn UpstreamClient>,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::health))
        .route(
            "/api/chat",
            post(handlers::chat).options(handlers::preflight),
        )
        .method_not_allowed_fallback(handlers::method_not_allowed)
}

/// CORS policy: echo the request origin only when the config allows it,
/// advertise POST/OPTIONS and the Content-Type header.
pub fn cors_layer(config: &RelayConfig) -> CorsLayer {
    let config = config.clone();
    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(move |origin: &HeaderValue, _| {
            origin
                .to_str()
                .map(|o| config.origin_allowed(o))
                .unwrap_or(false)
        }))
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}
