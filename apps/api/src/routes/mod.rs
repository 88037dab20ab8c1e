pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::state::AppState;
use crate::taxonomy::handlers as taxonomy;

/// Room for the JSON framing and escaping around the candidate text.
const REQUEST_ENVELOPE_BYTES: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state
        .config
        .max_text_bytes
        .saturating_add(REQUEST_ENVELOPE_BYTES);

    Router::new()
        .route("/health", get(health::health_handler))
        // Taxonomy API
        .route("/api/v1/taxonomy", get(taxonomy::handle_taxonomy_stats))
        .route("/api/v1/skills/:id/broader", get(taxonomy::handle_broader))
        .route(
            "/api/v1/occupations/:id",
            get(taxonomy::handle_get_occupation),
        )
        // Analysis API
        .route("/api/v1/analysis", post(analysis::handle_analyze))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
