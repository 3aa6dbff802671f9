//! Savings valuation over an in-progress quantity selection.
//!
//! The running estimate is derived state: it is recomputed from the catalog
//! and the current selection whenever either changes, and the figure a
//! caller submits at save time is persisted verbatim by the ledger.

use std::collections::BTreeMap;

use crate::catalog::{CatalogPlant, FALLBACK_MARKET_PRICE_PER_LB};
use crate::plan::GardenPlanItem;
use crate::types::DbId;

/// Quantity selection keyed by plant id. Entries absent from the map count
/// as zero. Ordered so derived item lists are deterministic.
pub type Selection = BTreeMap<DbId, u32>;

/// Estimated grocery savings for the current selection.
///
/// For each catalog plant: `quantity x yield_per_plant_lbs x price`, where
/// a plant without a market price falls back to
/// [`FALLBACK_MARKET_PRICE_PER_LB`]. No rounding happens during
/// accumulation; rounding to two decimals is a render-time concern.
pub fn compute_total_savings(catalog: &[CatalogPlant], selection: &Selection) -> f64 {
    catalog.iter().fold(0.0, |acc, plant| {
        let quantity = selection.get(&plant.id).copied().unwrap_or(0);
        let price = plant
            .market_price_per_lb
            .unwrap_or(FALLBACK_MARKET_PRICE_PER_LB);
        acc + quantity as f64 * plant.yield_per_plant_lbs * price
    })
}

/// Project a selection to persistable line items.
///
/// Zero-quantity entries are dropped; the result is ordered by plant id.
pub fn selection_items(selection: &Selection) -> Vec<GardenPlanItem> {
    selection
        .iter()
        .filter(|(_, &quantity)| quantity > 0)
        .map(|(&plant_id, &quantity)| GardenPlanItem { plant_id, quantity })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
