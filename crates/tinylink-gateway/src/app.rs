use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{
    health_handler, liveness_handler, metrics_handler, resolve_handler, shorten_handler,
};
use crate::state::AppState;

pub struct App {}

impl App {
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/", get(liveness_handler))
            .route("/health", get(health_handler))
            .nest(
                "/api/v1",
                Router::new()
                    .route("/shorten", post(shorten_handler))
                    .route("/metrics", get(metrics_handler)),
            )
            .route("/{code}", get(resolve_handler))
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}
