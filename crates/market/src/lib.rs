//! Keyo Market
//!
//! Regional market model for the Keyo trading simulation:
//!
//! - **Catalog**: the fixed list of resources and regions
//! - **Engine**: seeding, per-turn drift, the price update rule and
//!   trade feedback
//! - **Views**: regional and averaged snapshots that never alias the catalog
//! - **Statistics**: averages and leaderboards

pub mod catalog;
pub mod config;
pub mod engine;
pub mod stats;

// Re-export main types
pub use catalog::{ResourceCatalog, ResourceSpec};
pub use config::MarketConfig;
pub use engine::MarketEngine;
pub use stats::{DemandEntry, MarketStatistics, PriceEntry};
