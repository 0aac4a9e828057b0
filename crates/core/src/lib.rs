//! EcoEats domain core.
//!
//! Pure, synchronous logic shared by the persistence and HTTP layers:
//! shelf-life date arithmetic, the freshness evaluator, list filtering and
//! sorting, recipe recommendation, and item status lifecycles. Nothing in
//! this crate performs I/O.

pub mod error;
pub mod freshness;
pub mod inventory;
pub mod leftover;
pub mod query;
pub mod recommendation;
pub mod shelf_life;
pub mod types;
