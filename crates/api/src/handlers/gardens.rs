//! Handlers for the garden plan ledger.
//!
//! Create, list, and delete plans, plus the derived read models over the
//! history (aggregate stats, savings trend, CSV export). The derived
//! computations themselves live in `gardenplan_core::history` and
//! `gardenplan_core::export`; these handlers only fetch and project.

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use gardenplan_core::error::CoreError;
use gardenplan_core::export::export_csv;
use gardenplan_core::history::{aggregate_stats, build_savings_trend, PlanView};
use gardenplan_core::plan::{validate_plan_items, validate_total_savings};
use gardenplan_core::types::DbId;
use gardenplan_db::models::garden_plan::CreateGardenPlan;
use gardenplan_db::repositories::GardenPlanRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// Confirmation body for single-plan deletion.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: &'static str,
}

/// Confirmation body for bulk deletion.
#[derive(Debug, Serialize)]
pub struct DeleteAllResponse {
    pub message: &'static str,
    pub count: u64,
}

/// GET /api/gardens
///
/// Full plan history, newest first, plant references resolved.
pub async fn list_gardens(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let plans = GardenPlanRepo::list(&state.pool).await?;
    Ok(Json(plans))
}

/// POST /api/gardens
///
/// Persist a new plan. The submitted savings total is stored as recorded,
/// never recomputed against current catalog prices.
pub async fn create_garden(
    State(state): State<AppState>,
    Json(input): Json<CreateGardenPlan>,
) -> AppResult<impl IntoResponse> {
    validate_plan_items(&input.items)?;
    let total = validate_total_savings(input.total_estimated_savings)?;

    let plan =
        GardenPlanRepo::create(&state.pool, &input.items, total, input.name.as_deref()).await?;

    tracing::info!(
        plan_id = plan.id,
        items = plan.items.len(),
        total_estimated_savings = total,
        "Garden plan saved"
    );

    Ok((StatusCode::CREATED, Json(plan)))
}

/// DELETE /api/gardens/{id}
///
/// Remove exactly one plan. An unknown id is a 404, never a silent
/// success.
pub async fn delete_garden(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = GardenPlanRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(CoreError::NotFound { entity: "Garden plan", id }.into());
    }

    tracing::info!(plan_id = id, "Garden plan deleted");

    Ok(Json(DeleteResponse {
        message: "Plan deleted successfully",
    }))
}

/// DELETE /api/gardens
///
/// Clear the ledger. Idempotent: a second call reports count 0.
pub async fn delete_all_gardens(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let count = GardenPlanRepo::delete_all(&state.pool).await?;

    tracing::info!(count, "All garden plans deleted");

    Ok(Json(DeleteAllResponse {
        message: "All garden plans deleted",
        count,
    }))
}

/// GET /api/gardens/stats
///
/// Aggregate savings, plan count, and expected pounds across the history.
pub async fn garden_stats(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let views = plan_views(&state).await?;
    Ok(Json(aggregate_stats(&views)))
}

/// GET /api/gardens/trend
///
/// Savings trend points for the most recent plans, oldest to newest.
pub async fn savings_trend(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let views = plan_views(&state).await?;
    Ok(Json(build_savings_trend(&views)))
}

/// GET /api/gardens/export
///
/// Download the plan history as a CSV attachment.
pub async fn export_gardens(State(state): State<AppState>) -> AppResult<Response> {
    let views = plan_views(&state).await?;
    let csv = export_csv(&views);

    Ok(Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/csv")
        .header(
            header::CONTENT_DISPOSITION,
            "attachment; filename=\"garden-plans.csv\"",
        )
        .body(axum::body::Body::from(csv))
        .unwrap())
}

/// Fetch the history and project it to the derived-metric views.
async fn plan_views(state: &AppState) -> AppResult<Vec<PlanView>> {
    let plans = GardenPlanRepo::list(&state.pool).await?;
    Ok(plans.iter().map(|plan| plan.to_view()).collect())
}
