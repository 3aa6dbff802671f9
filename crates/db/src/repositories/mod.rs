//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod garden_plan_repo;
pub mod plant_repo;

pub use garden_plan_repo::GardenPlanRepo;
pub use plant_repo::PlantRepo;
