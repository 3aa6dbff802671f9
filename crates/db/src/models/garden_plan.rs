//! Garden plan ledger models.

use gardenplan_core::history::{PlanView, ResolvedItemView};
use gardenplan_core::plan::GardenPlanItem;
use gardenplan_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::plant::Plant;

/// A row from the `garden_plans` table, before its items are attached.
#[derive(Debug, Clone, FromRow)]
pub struct GardenPlanRow {
    pub id: DbId,
    pub owner_id: String,
    pub name: String,
    pub total_estimated_savings: f64,
    pub created_at: Timestamp,
}

/// A ledger item with its plant reference resolved against the catalog.
///
/// Serialized with the resolved record under `plantId`: the full plant
/// when it still exists, `null` when the reference dangles.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedPlanItem {
    #[serde(rename = "plantId")]
    pub plant: Option<Plant>,
    pub quantity: u32,
}

/// A garden plan as served by the API: row data plus resolved items in
/// their persisted order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GardenPlan {
    pub id: DbId,
    pub owner_id: String,
    pub name: String,
    pub items: Vec<ResolvedPlanItem>,
    pub total_estimated_savings: f64,
    pub created_at: Timestamp,
}

/// DTO for creating a plan.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGardenPlan {
    #[serde(default)]
    pub items: Vec<GardenPlanItem>,
    /// Snapshot computed by the caller and persisted verbatim. Optional so
    /// an absent field surfaces as a validation error, not a decode error.
    pub total_estimated_savings: Option<f64>,
    /// Defaults at the storage layer when absent.
    pub name: Option<String>,
}

impl GardenPlan {
    /// Project to the view the derived-metric computations consume.
    pub fn to_view(&self) -> PlanView {
        PlanView {
            created_at: self.created_at,
            total_estimated_savings: self.total_estimated_savings,
            items: self
                .items
                .iter()
                .map(|item| ResolvedItemView {
                    quantity: item.quantity,
                    plant_name: item.plant.as_ref().map(|p| p.name.clone()),
                    yield_per_plant_lbs: item.plant.as_ref().map(|p| p.yield_per_plant_lbs),
                })
                .collect(),
        }
    }
}
