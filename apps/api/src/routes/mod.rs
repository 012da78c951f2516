pub mod cors;
pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;
use crate::ui::handlers as ui;

pub fn build_router(state: AppState) -> Router {
    let analyze = Router::new()
        .route(
            "/api/analyze",
            post(handlers::handle_analyze).fallback(handlers::handle_method_not_allowed),
        )
        // Input size is governed by MAX_INPUT_CHARS alone
        .layer(DefaultBodyLimit::disable())
        .layer(cors::cors_layer(&state.config.allowed_origins))
        .layer(middleware::from_fn(cors::preflight_no_content));

    Router::new()
        .route("/health", get(health::health_handler))
        // Presentation layer
        .route("/", get(ui::handle_index).post(ui::handle_submit))
        .merge(analyze)
        .with_state(state)
}
