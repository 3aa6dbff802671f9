//! Integration tests for the plant catalog endpoint.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};
use gardenplan_db::models::plant::NewPlant;
use gardenplan_db::repositories::PlantRepo;
use sqlx::PgPool;

fn herb(name: &str) -> NewPlant {
    NewPlant {
        name: name.to_string(),
        category: Some("Herb".to_string()),
        spacing_inches: 6.0,
        yield_per_plant_lbs: 0.5,
        days_to_harvest: 30,
        market_price_per_lb: Some(12.0),
        image: Some("basil.jpg".to_string()),
    }
}

// ---------------------------------------------------------------------------
// Test: empty catalog serves an empty array
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn empty_catalog_returns_empty_array(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/plants").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!([]));
}

// ---------------------------------------------------------------------------
// Test: catalog entries serve camelCase fields
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn catalog_serves_camel_case_fields(pool: PgPool) {
    PlantRepo::insert(&pool, &herb("Basil")).await.unwrap();

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/plants").await).await;

    let plant = &json[0];
    assert_eq!(plant["name"], "Basil");
    assert_eq!(plant["category"], "Herb");
    assert_eq!(plant["spacingInches"], 6.0);
    assert_eq!(plant["yieldPerPlantLbs"], 0.5);
    assert_eq!(plant["daysToHarvest"], 30);
    assert_eq!(plant["marketPricePerLb"], 12.0);
    assert_eq!(plant["image"], "basil.jpg");
}

// ---------------------------------------------------------------------------
// Test: unpriced entries serve a null price and the default category
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn unpriced_entry_serves_null_price_and_default_category(pool: PgPool) {
    let bare = NewPlant {
        name: "Tomato".to_string(),
        category: None,
        spacing_inches: 18.0,
        yield_per_plant_lbs: 15.0,
        days_to_harvest: 80,
        market_price_per_lb: None,
        image: None,
    };
    PlantRepo::insert(&pool, &bare).await.unwrap();

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/plants").await).await;

    assert_eq!(json[0]["category"], "Vegetable");
    assert!(json[0]["marketPricePerLb"].is_null());
    assert!(json[0]["image"].is_null());
}

// ---------------------------------------------------------------------------
// Test: the endpoint returns everything, unfiltered
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn catalog_is_served_whole(pool: PgPool) {
    for name in ["Basil", "Mint", "Sage"] {
        PlantRepo::insert(&pool, &herb(name)).await.unwrap();
    }

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/plants").await).await;

    assert_eq!(json.as_array().unwrap().len(), 3);
}
