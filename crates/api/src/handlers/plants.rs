//! Handlers for the plant catalog.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use gardenplan_db::repositories::PlantRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/plants
///
/// List the full catalog. Search and category filtering are client-side
/// concerns; this endpoint always returns everything.
pub async fn list_plants(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let plants = PlantRepo::list(&state.pool).await?;
    Ok(Json(plants))
}
