//! Repository for the garden plan ledger.
//!
//! Plans live in `garden_plans` with their line items in
//! `garden_plan_items`. Every read resolves each item's weak plant
//! reference with a LEFT JOIN; a dangling reference resolves to `None`
//! instead of failing the query.

use std::collections::HashMap;

use gardenplan_core::plan::{GardenPlanItem, DEFAULT_OWNER_ID, DEFAULT_PLAN_NAME};
use gardenplan_core::types::DbId;
use sqlx::{FromRow, PgPool};

use crate::models::garden_plan::{GardenPlan, GardenPlanRow, ResolvedPlanItem};
use crate::models::plant::Plant;

/// Column list for garden_plans queries.
const PLAN_COLUMNS: &str = "id, owner_id, name, total_estimated_savings, created_at";

/// Joined item row: ledger columns plus the catalog columns from the
/// weak-reference LEFT JOIN, all nullable on the catalog side.
#[derive(Debug, FromRow)]
struct ItemJoinRow {
    plan_id: DbId,
    quantity: i32,
    resolved_id: Option<DbId>,
    resolved_name: Option<String>,
    resolved_category: Option<String>,
    resolved_spacing_inches: Option<f64>,
    resolved_yield_per_plant_lbs: Option<f64>,
    resolved_days_to_harvest: Option<i32>,
    resolved_market_price_per_lb: Option<f64>,
    resolved_image: Option<String>,
}

impl ItemJoinRow {
    fn into_resolved(self) -> (DbId, ResolvedPlanItem) {
        // A NULL resolved id means the plant was removed after the plan was
        // saved; the item stays and the reference renders unresolved.
        let plant = match self.resolved_id {
            Some(id) => Some(Plant {
                id,
                name: self.resolved_name.unwrap_or_default(),
                category: self.resolved_category.unwrap_or_default(),
                spacing_inches: self.resolved_spacing_inches.unwrap_or_default(),
                yield_per_plant_lbs: self.resolved_yield_per_plant_lbs.unwrap_or_default(),
                days_to_harvest: self.resolved_days_to_harvest.unwrap_or_default(),
                market_price_per_lb: self.resolved_market_price_per_lb,
                image: self.resolved_image,
            }),
            None => None,
        };
        (
            self.plan_id,
            ResolvedPlanItem {
                plant,
                quantity: self.quantity as u32,
            },
        )
    }
}

/// Provides create/list/delete operations for garden plans. Plans are never
/// updated in place.
pub struct GardenPlanRepo;

impl GardenPlanRepo {
    /// Persist a new plan and its line items, returning it with plant
    /// references resolved.
    ///
    /// The savings total is stored exactly as passed; the ledger never
    /// recomputes it against current catalog prices.
    pub async fn create(
        pool: &PgPool,
        items: &[GardenPlanItem],
        total_estimated_savings: f64,
        name: Option<&str>,
    ) -> Result<GardenPlan, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO garden_plans (owner_id, name, total_estimated_savings)
             VALUES ($1, $2, $3)
             RETURNING {PLAN_COLUMNS}"
        );
        let row = sqlx::query_as::<_, GardenPlanRow>(&query)
            .bind(DEFAULT_OWNER_ID)
            .bind(name.unwrap_or(DEFAULT_PLAN_NAME))
            .bind(total_estimated_savings)
            .fetch_one(&mut *tx)
            .await?;

        for (position, item) in items.iter().enumerate() {
            sqlx::query(
                "INSERT INTO garden_plan_items (plan_id, plant_id, quantity, position)
                 VALUES ($1, $2, $3, $4)",
            )
            .bind(row.id)
            .bind(item.plant_id)
            .bind(item.quantity as i32)
            .bind(position as i32)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        let mut items_by_plan = Self::load_items(pool, &[row.id]).await?;
        let items = items_by_plan.remove(&row.id).unwrap_or_default();
        Ok(Self::assemble(row, items))
    }

    /// List every plan, newest first, items resolved.
    pub async fn list(pool: &PgPool) -> Result<Vec<GardenPlan>, sqlx::Error> {
        let query =
            format!("SELECT {PLAN_COLUMNS} FROM garden_plans ORDER BY created_at DESC, id DESC");
        let rows = sqlx::query_as::<_, GardenPlanRow>(&query)
            .fetch_all(pool)
            .await?;

        let plan_ids: Vec<DbId> = rows.iter().map(|row| row.id).collect();
        let mut items_by_plan = Self::load_items(pool, &plan_ids).await?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let items = items_by_plan.remove(&row.id).unwrap_or_default();
                Self::assemble(row, items)
            })
            .collect())
    }

    /// Delete one plan by id. Returns `true` if a row was deleted; its
    /// items go with it via the cascade.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM garden_plans WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete every plan, returning the count removed. Idempotent: a second
    /// call reports zero.
    pub async fn delete_all(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM garden_plans").execute(pool).await?;
        Ok(result.rows_affected())
    }

    /// Load the resolved items for a set of plans, grouped by plan id and
    /// ordered by persisted position within each plan.
    async fn load_items(
        pool: &PgPool,
        plan_ids: &[DbId],
    ) -> Result<HashMap<DbId, Vec<ResolvedPlanItem>>, sqlx::Error> {
        if plan_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = sqlx::query_as::<_, ItemJoinRow>(
            "SELECT i.plan_id, i.quantity,
                    p.id AS resolved_id,
                    p.name AS resolved_name,
                    p.category AS resolved_category,
                    p.spacing_inches AS resolved_spacing_inches,
                    p.yield_per_plant_lbs AS resolved_yield_per_plant_lbs,
                    p.days_to_harvest AS resolved_days_to_harvest,
                    p.market_price_per_lb AS resolved_market_price_per_lb,
                    p.image AS resolved_image
             FROM garden_plan_items i
             LEFT JOIN plants p ON p.id = i.plant_id
             WHERE i.plan_id = ANY($1)
             ORDER BY i.plan_id, i.position",
        )
        .bind(plan_ids)
        .fetch_all(pool)
        .await?;

        let mut items_by_plan: HashMap<DbId, Vec<ResolvedPlanItem>> = HashMap::new();
        for row in rows {
            let (plan_id, item) = row.into_resolved();
            items_by_plan.entry(plan_id).or_default().push(item);
        }
        Ok(items_by_plan)
    }

    fn assemble(row: GardenPlanRow, items: Vec<ResolvedPlanItem>) -> GardenPlan {
        GardenPlan {
            id: row.id,
            owner_id: row.owner_id,
            name: row.name,
            items,
            total_estimated_savings: row.total_estimated_savings,
            created_at: row.created_at,
        }
    }
}
