pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::case::handlers as case_handlers;
use crate::grading::handlers as grading_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/cases/generate",
            post(case_handlers::handle_generate_case),
        )
        .route(
            "/api/v1/speeches/grade",
            post(grading_handlers::handle_grade_speech),
        )
        .with_state(state)
}
