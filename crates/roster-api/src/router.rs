//! Axum router construction for the student API.
//!
//! Assembles all routes into a single [`Router`] with CORS and request
//! tracing middleware.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router for the student API.
///
/// The router includes:
/// - `POST /students` -- create
/// - `GET /students` -- list
/// - `GET /students/{id}` -- get
/// - `PUT /students/{id}` -- replace
/// - `DELETE /students/{id}` -- delete
/// - `GET /students/{id}/summary` -- one-sentence summary
///
/// Other methods on these paths answer 405; other paths answer 404.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/students",
            get(handlers::list_students).post(handlers::create_student),
        )
        .route(
            "/students/{id}",
            get(handlers::get_student)
                .put(handlers::update_student)
                .delete(handlers::delete_student),
        )
        .route("/students/{id}/summary", get(handlers::get_student_summary))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
