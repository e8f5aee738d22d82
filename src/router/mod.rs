use std::time::Duration;

use anyhow::{Context, Result};
use axum::{http::HeaderValue, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{config::Config, handlers, AppState};

/// Build the application router with tracing, timeout and CORS layers.
pub fn build_router(state: AppState) -> Result<Router> {
    let cors = cors_layer(&state.config)?;
    let timeout = Duration::from_secs(state.config.request_timeout);

    let router = Router::new()
        .route("/api/alunos", get(handlers::alunos::list_active_students))
        .route("/health", get(handlers::health::health_check))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(timeout))
                .layer(cors),
        )
        .with_state(state);

    Ok(router)
}

/// "*" opens the API to any origin; anything else restricts it to the one
/// configured domain.
fn cors_layer(config: &Config) -> Result<CorsLayer> {
    let layer = if config.cors_is_open() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origin = config
            .cors_allowed_origin
            .parse::<HeaderValue>()
            .with_context(|| {
                format!(
                    "invalid CORS_ALLOWED_ORIGIN: {}",
                    config.cors_allowed_origin
                )
            })?;
        CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(Any)
            .allow_headers(Any)
    };

    Ok(layer)
}
