//! Route definitions for the plant catalog.

use axum::routing::get;
use axum::Router;

use crate::handlers::plants;
use crate::state::AppState;

/// Catalog routes. Read-only: the catalog is mutated only by the
/// out-of-band seed process.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(plants::list_plants))
}
