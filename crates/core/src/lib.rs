//! Pure domain logic for the garden plan ledger.
//!
//! Everything in this crate is synchronous and I/O-free: catalog filtering,
//! savings valuation, plan validation, history analytics, and CSV export all
//! take explicit inputs and return values. Persistence lives in
//! `gardenplan-db`, the HTTP surface in `gardenplan-api`.

pub mod catalog;
pub mod error;
pub mod export;
pub mod history;
pub mod plan;
pub mod types;
pub mod valuation;
