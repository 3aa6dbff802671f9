//! Derived metrics over the persisted plan history.
//!
//! History always arrives newest-first, the order the ledger serves it in.
//! Unresolved plant references are tolerated everywhere: they contribute
//! zero pounds and render as a placeholder, never as a failure.

use serde::Serialize;

use crate::types::Timestamp;

/// Number of history entries the savings trend covers.
pub const SAVINGS_TREND_POINTS: usize = 7;

/// A plan line item with its plant reference resolved, or not.
#[derive(Debug, Clone)]
pub struct ResolvedItemView {
    pub quantity: u32,
    /// Display name of the resolved plant; `None` when the reference
    /// dangles.
    pub plant_name: Option<String>,
    /// Yield of the resolved plant; `None` when the reference dangles.
    pub yield_per_plant_lbs: Option<f64>,
}

/// The slice of a persisted plan the derived metrics consume.
#[derive(Debug, Clone)]
pub struct PlanView {
    pub created_at: Timestamp,
    pub total_estimated_savings: f64,
    pub items: Vec<ResolvedItemView>,
}

/// One point of the savings trend chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub date: String,
    pub total_estimated_savings: f64,
}

/// Aggregate statistics across the whole plan history.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateStats {
    pub total_savings: f64,
    pub total_plans: u32,
    pub total_pounds: f64,
}

/// Format a timestamp the way the history table renders dates (`M/D/YYYY`,
/// no leading zeros).
pub fn format_plan_date(at: Timestamp) -> String {
    at.format("%-m/%-d/%Y").to_string()
}

/// Build the savings trend from a newest-first history.
///
/// The history is reversed into chronological order and the last
/// [`SAVINGS_TREND_POINTS`] entries of that sequence are kept, so the chart
/// shows the most recent plans oldest to newest.
pub fn build_savings_trend(history: &[PlanView]) -> Vec<TrendPoint> {
    let mut points: Vec<TrendPoint> = history
        .iter()
        .rev()
        .map(|plan| TrendPoint {
            date: format_plan_date(plan.created_at),
            total_estimated_savings: plan.total_estimated_savings,
        })
        .collect();
    if points.len() > SAVINGS_TREND_POINTS {
        points.drain(..points.len() - SAVINGS_TREND_POINTS);
    }
    points
}

/// Total pounds a single plan is expected to yield. Unresolved plant
/// references contribute zero.
pub fn plan_total_pounds(plan: &PlanView) -> f64 {
    plan.items
        .iter()
        .map(|item| item.quantity as f64 * item.yield_per_plant_lbs.unwrap_or(0.0))
        .sum()
}

/// Aggregate savings, plan count, and expected pounds across the history.
pub fn aggregate_stats(history: &[PlanView]) -> AggregateStats {
    AggregateStats {
        total_savings: history
            .iter()
            .map(|plan| plan.total_estimated_savings)
            .sum(),
        total_plans: history.len() as u32,
        total_pounds: history.iter().map(plan_total_pounds).sum(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn plan_on(day: u32, savings: f64) -> PlanView {
        PlanView {
            created_at: chrono::Utc.with_ymd_and_hms(2025, 3, day, 12, 0, 0).unwrap(),
            total_estimated_savings: savings,
            items: Vec::new(),
        }
    }

    fn item(quantity: u32, yield_lbs: Option<f64>) -> ResolvedItemView {
        ResolvedItemView {
            quantity,
            plant_name: yield_lbs.map(|_| "Tomato".to_string()),
            yield_per_plant_lbs: yield_lbs,
        }
    }

    #[test]
    fn trend_of_short_history_covers_everything_oldest_first() {
        // Newest-first input: day 3, day 2, day 1.
        let history = vec![plan_on(3, 30.0), plan_on(2, 20.0), plan_on(1, 10.0)];
        let trend = build_savings_trend(&history);
        assert_eq!(trend.len(), 3);
        assert_eq!(trend[0].date, "3/1/2025");
        assert_eq!(trend[2].date, "3/3/2025");
        assert_eq!(trend[0].total_estimated_savings, 10.0);
        assert_eq!(trend[2].total_estimated_savings, 30.0);
    }

    #[test]
    fn trend_of_long_history_keeps_most_recent_seven() {
        // Days 10 down to 1, newest first.
        let history: Vec<PlanView> = (1..=10).rev().map(|d| plan_on(d, d as f64)).collect();
        let trend = build_savings_trend(&history);
        assert_eq!(trend.len(), SAVINGS_TREND_POINTS);
        // Oldest kept point is day 4, newest is day 10.
        assert_eq!(trend[0].date, "3/4/2025");
        assert_eq!(trend[6].date, "3/10/2025");
    }

    #[test]
    fn trend_of_empty_history_is_empty() {
        assert!(build_savings_trend(&[]).is_empty());
    }

    #[test]
    fn date_format_has_no_leading_zeros() {
        let at = chrono::Utc.with_ymd_and_hms(2025, 1, 5, 0, 0, 0).unwrap();
        assert_eq!(format_plan_date(at), "1/5/2025");
    }

    #[test]
    fn stats_sum_savings_and_count_plans() {
        let history = vec![plan_on(1, 10.0), plan_on(2, 32.5)];
        let stats = aggregate_stats(&history);
        assert_eq!(stats.total_plans, 2);
        assert!((stats.total_savings - 42.5).abs() < f64::EPSILON);
        assert_eq!(stats.total_pounds, 0.0);
    }

    #[test]
    fn pounds_count_resolved_items_only() {
        let mut plan = plan_on(1, 0.0);
        plan.items = vec![item(2, Some(15.0)), item(4, None)];
        // 2 x 15 resolved, the dangling item contributes nothing.
        assert!((plan_total_pounds(&plan) - 30.0).abs() < f64::EPSILON);

        let stats = aggregate_stats(&[plan]);
        assert!((stats.total_pounds - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn stats_of_empty_history_are_zero() {
        let stats = aggregate_stats(&[]);
        assert_eq!(
            stats,
            AggregateStats {
                total_savings: 0.0,
                total_plans: 0,
                total_pounds: 0.0,
            }
        );
    }
}
