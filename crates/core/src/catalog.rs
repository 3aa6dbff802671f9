//! Plant catalog constants and filtering.
//!
//! The catalog itself is read-only from the application's perspective; this
//! module provides the constants the rest of the system agrees on and the
//! filtering operation the picker UI applies to a fetched catalog.

use crate::types::DbId;

/// Substitute price (USD per pound) for catalog entries that have no
/// recorded market price.
pub const FALLBACK_MARKET_PRICE_PER_LB: f64 = 4.50;

/// Category filter value meaning "no category restriction".
pub const CATEGORY_ALL: &str = "All";

/// Category assigned to catalog entries that do not specify one.
pub const DEFAULT_CATEGORY: &str = "Vegetable";

/// Categories the picker UI enumerates. The set is open-ended at the
/// storage layer; these are the values the seed catalog uses.
pub const PLANT_CATEGORIES: &[&str] = &["Vegetable", "Fruit", "Herb"];

/// The slice of a catalog entry that filtering and valuation consume.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogPlant {
    pub id: DbId,
    pub name: String,
    pub category: String,
    /// Pounds harvested per plant per cycle.
    pub yield_per_plant_lbs: f64,
    /// Absent entries fall back to [`FALLBACK_MARKET_PRICE_PER_LB`].
    pub market_price_per_lb: Option<f64>,
}

/// True when a plant matches both the search term and the category filter.
///
/// The name match is a case-insensitive substring test; the category match
/// is exact unless the filter is [`CATEGORY_ALL`]. Both predicates must
/// hold.
pub fn matches_filter(plant: &CatalogPlant, search_term: &str, category: &str) -> bool {
    let name_matches = plant
        .name
        .to_lowercase()
        .contains(&search_term.to_lowercase());
    let category_matches = category == CATEGORY_ALL || plant.category == category;
    name_matches && category_matches
}

/// Filter a catalog by search term and category.
///
/// Produces a derived sequence preserving source order; the input is never
/// mutated. An empty search term combined with [`CATEGORY_ALL`] returns
/// every entry.
pub fn filter_catalog<'a>(
    catalog: &'a [CatalogPlant],
    search_term: &str,
    category: &str,
) -> Vec<&'a CatalogPlant> {
    catalog
        .iter()
        .filter(|plant| matches_filter(plant, search_term, category))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
