//! Garden plan line items and creation-time validation.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DbId;

/// Owner recorded on every plan until real accounts exist.
pub const DEFAULT_OWNER_ID: &str = "guest";

/// Name recorded on plans saved without an explicit name.
pub const DEFAULT_PLAN_NAME: &str = "My Dream Garden";

/// A single (plant reference, quantity) line item.
///
/// `plant_id` is a weak reference into the catalog: it is resolved at read
/// time and may dangle if the plant is later removed. Quantities are
/// strictly positive once a plan is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GardenPlanItem {
    pub plant_id: DbId,
    pub quantity: u32,
}

/// Validate the line items of a plan about to be persisted.
///
/// A plan with no items is rejected, as is any zero-quantity item:
/// zero-quantity selections are dropped before persistence, so one reaching
/// the ledger is a caller bug.
pub fn validate_plan_items(items: &[GardenPlanItem]) -> Result<(), CoreError> {
    if items.is_empty() {
        return Err(CoreError::Validation("Garden is empty".to_string()));
    }
    if let Some(item) = items.iter().find(|item| item.quantity == 0) {
        return Err(CoreError::Validation(format!(
            "Item for plant {} has zero quantity",
            item.plant_id
        )));
    }
    Ok(())
}

/// Validate a submitted savings snapshot.
///
/// The ledger stores the figure as recorded, so the only acceptance
/// criteria are presence, finiteness, and non-negativity. Returns the
/// accepted value unchanged.
pub fn validate_total_savings(total: Option<f64>) -> Result<f64, CoreError> {
    let total = total.ok_or_else(|| {
        CoreError::Validation("totalEstimatedSavings is required".to_string())
    })?;
    if !total.is_finite() || total < 0.0 {
        return Err(CoreError::Validation(format!(
            "totalEstimatedSavings must be a non-negative number, got {total}"
        )));
    }
    Ok(total)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_items_rejected() {
        let err = validate_plan_items(&[]).unwrap_err();
        assert!(matches!(err, CoreError::Validation(msg) if msg == "Garden is empty"));
    }

    #[test]
    fn zero_quantity_item_rejected() {
        let items = [
            GardenPlanItem { plant_id: 1, quantity: 2 },
            GardenPlanItem { plant_id: 2, quantity: 0 },
        ];
        assert!(validate_plan_items(&items).is_err());
    }

    #[test]
    fn positive_quantities_accepted() {
        let items = [GardenPlanItem { plant_id: 1, quantity: 3 }];
        assert!(validate_plan_items(&items).is_ok());
    }

    #[test]
    fn missing_total_rejected() {
        assert!(validate_total_savings(None).is_err());
    }

    #[test]
    fn negative_total_rejected() {
        assert!(validate_total_savings(Some(-0.01)).is_err());
    }

    #[test]
    fn non_finite_total_rejected() {
        assert!(validate_total_savings(Some(f64::NAN)).is_err());
        assert!(validate_total_savings(Some(f64::INFINITY)).is_err());
    }

    #[test]
    fn accepted_total_is_returned_unchanged() {
        assert_eq!(validate_total_savings(Some(12.5)).unwrap(), 12.5);
        assert_eq!(validate_total_savings(Some(0.0)).unwrap(), 0.0);
    }
}
