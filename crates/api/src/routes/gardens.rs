//! Route definitions for the garden plan ledger.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::gardens;
use crate::state::AppState;

/// Ledger routes.
///
/// ```text
/// GET    /          -> list_gardens
/// POST   /          -> create_garden
/// DELETE /          -> delete_all_gardens
/// GET    /stats     -> garden_stats
/// GET    /trend     -> savings_trend
/// GET    /export    -> export_gardens
/// DELETE /{id}      -> delete_garden
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(gardens::list_gardens)
                .post(gardens::create_garden)
                .delete(gardens::delete_all_gardens),
        )
        .route("/stats", get(gardens::garden_stats))
        .route("/trend", get(gardens::savings_trend))
        .route("/export", get(gardens::export_gardens))
        .route("/{id}", delete(gardens::delete_garden))
}
