//! Repository for the `plants` table.

use gardenplan_core::catalog::DEFAULT_CATEGORY;
use gardenplan_core::types::DbId;
use sqlx::PgPool;

use crate::models::plant::{NewPlant, Plant};

/// Column list for plants queries.
const COLUMNS: &str =
    "id, name, category, spacing_inches, yield_per_plant_lbs, days_to_harvest, \
     market_price_per_lb, image";

/// Read access to the plant catalog, plus the writes the out-of-band seed
/// process needs. The application itself never mutates the catalog.
pub struct PlantRepo;

impl PlantRepo {
    /// List every catalog entry in storage order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Plant>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM plants ORDER BY id");
        sqlx::query_as::<_, Plant>(&query).fetch_all(pool).await
    }

    /// Insert a catalog entry, returning the created row.
    pub async fn insert(pool: &PgPool, input: &NewPlant) -> Result<Plant, sqlx::Error> {
        let category = input.category.as_deref().unwrap_or(DEFAULT_CATEGORY);
        let query = format!(
            "INSERT INTO plants
                (name, category, spacing_inches, yield_per_plant_lbs, days_to_harvest,
                 market_price_per_lb, image)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Plant>(&query)
            .bind(&input.name)
            .bind(category)
            .bind(input.spacing_inches)
            .bind(input.yield_per_plant_lbs)
            .bind(input.days_to_harvest)
            .bind(input.market_price_per_lb)
            .bind(&input.image)
            .fetch_one(pool)
            .await
    }

    /// Remove every catalog entry, returning the count removed. Seed-only.
    pub async fn delete_all(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM plants").execute(pool).await?;
        Ok(result.rows_affected())
    }

    /// Remove one catalog entry by id. Returns `true` if a row was deleted.
    ///
    /// Seed and test tooling only: the API never deletes plants, and ledger
    /// items referencing a removed plant simply resolve to nothing.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM plants WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
