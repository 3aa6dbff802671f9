//! Out-of-band catalog seed.
//!
//! Clears the plant catalog and loads the seed set. The running API never
//! mutates plants; this binary is the only writer.
//!
//! Run with `cargo run --bin gardenplan-seed`.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gardenplan_db::models::plant::NewPlant;
use gardenplan_db::repositories::PlantRepo;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gardenplan_seed=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = gardenplan_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");

    gardenplan_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");

    // Clear existing entries so repeated seeds don't double up.
    let removed = PlantRepo::delete_all(&pool)
        .await
        .expect("Failed to clear plant catalog");
    tracing::info!(removed, "Cleared existing catalog");

    let catalog = seed_catalog();
    for plant in &catalog {
        let created = PlantRepo::insert(&pool, plant)
            .await
            .expect("Failed to insert plant");
        tracing::info!(id = created.id, name = %created.name, "Seeded plant");
    }

    tracing::info!(count = catalog.len(), "Catalog seeded");
}

/// The seed catalog. Entries without a market price fall back to the
/// standard substitute at valuation time.
fn seed_catalog() -> Vec<NewPlant> {
    vec![
        NewPlant {
            name: "Tomato".to_string(),
            category: None,
            spacing_inches: 18.0,
            yield_per_plant_lbs: 15.0,
            days_to_harvest: 80,
            market_price_per_lb: None,
            image: None,
        },
        NewPlant {
            name: "Carrot".to_string(),
            category: None,
            spacing_inches: 3.0,
            yield_per_plant_lbs: 0.2,
            days_to_harvest: 70,
            market_price_per_lb: None,
            image: None,
        },
        NewPlant {
            name: "Cucumber".to_string(),
            category: None,
            spacing_inches: 12.0,
            yield_per_plant_lbs: 10.0,
            days_to_harvest: 60,
            market_price_per_lb: None,
            image: None,
        },
    ]
}
