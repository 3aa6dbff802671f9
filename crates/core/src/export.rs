//! CSV export of the plan history.

use crate::history::{format_plan_date, plan_total_pounds, PlanView};

/// Header row of the export artifact.
pub const CSV_HEADER: &str = "Date,Plants,Total Yield (lbs),Total Savings ($)";

/// Display label for a dangling plant reference.
pub const UNRESOLVED_PLANT_LABEL: &str = "Plant";

/// Render the plan history as a CSV document, one row per plan.
///
/// The "Plants" column is quoted and pipe-separated
/// (`"2x Tomato | 3x Basil"`); dangling references render as
/// [`UNRESOLVED_PLANT_LABEL`]. Yields carry one decimal, savings two.
pub fn export_csv(history: &[PlanView]) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');
    for plan in history {
        let plants = plan
            .items
            .iter()
            .map(|item| {
                format!(
                    "{}x {}",
                    item.quantity,
                    item.plant_name.as_deref().unwrap_or(UNRESOLVED_PLANT_LABEL)
                )
            })
            .collect::<Vec<_>>()
            .join(" | ");
        out.push_str(&format!(
            "{},\"{}\",{:.1},{:.2}\n",
            format_plan_date(plan.created_at),
            plants,
            plan_total_pounds(plan),
            plan.total_estimated_savings,
        ));
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
