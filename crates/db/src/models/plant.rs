//! Plant catalog model.

use gardenplan_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `plants` table.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Plant {
    pub id: DbId,
    pub name: String,
    pub category: String,
    pub spacing_inches: f64,
    pub yield_per_plant_lbs: f64,
    pub days_to_harvest: i32,
    /// Absent for entries the market survey never priced; valuation falls
    /// back to the standard substitute.
    pub market_price_per_lb: Option<f64>,
    /// Illustrative imagery key, not business-critical.
    pub image: Option<String>,
}

/// DTO for seeding a catalog entry. Used only by the out-of-band seed
/// process and tests; the API exposes no plant writes.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPlant {
    pub name: String,
    /// Defaults to `Vegetable` at insert when absent.
    pub category: Option<String>,
    pub spacing_inches: f64,
    pub yield_per_plant_lbs: f64,
    pub days_to_harvest: i32,
    pub market_price_per_lb: Option<f64>,
    pub image: Option<String>,
}
