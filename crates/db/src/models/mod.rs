//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//!
//! Wire field names are camelCase, matching the recorded API contract.

pub mod garden_plan;
pub mod plant;
