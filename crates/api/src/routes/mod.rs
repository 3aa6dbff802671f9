pub mod gardens;
pub mod health;
pub mod plants;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /plants            GET list catalog
/// /gardens           GET history, POST create, DELETE clear
/// /gardens/stats     GET aggregate stats
/// /gardens/trend     GET savings trend
/// /gardens/export    GET CSV download
/// /gardens/{id}      DELETE one plan
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/plants", plants::router())
        .nest("/gardens", gardens::router())
}
