// --- File: crates/calbridge_common/src/routes.rs ---

use axum::{routing::get, Router};

use crate::handlers::root_handler;

/// Creates a router containing the routes shared by every deployment
/// (currently the root health check).
pub fn routes() -> Router {
    Router::new().route("/", get(root_handler))
}
