//! Route definitions and router construction.
//!
//! Six fixed paths, each bound to a constant-output handler. Routing is
//! method-agnostic: the frontend's HTTP client picks the method, so every
//! method maps to the same handler.

use axum::Router;
use axum::routing::any;
use tower_http::trace::TraceLayer;

use crate::handlers;

/// Create the router with all acknowledgment routes.
///
/// Unmatched paths fall through to axum's default 404 response.
pub fn create_router() -> Router {
    Router::new()
        .route("/signup", any(handlers::signup))
        .route("/login", any(handlers::login))
        .route("/save", any(handlers::save))
        .route("/load", any(handlers::load))
        .route("/getClass", any(handlers::get_class))
        .route("/optimise", any(handlers::optimise))
        .layer(TraceLayer::new_for_http())
}
