//! Keyo Simulation - single-player trading session
//!
//! Orchestrates the full game:
//!
//! - **Bootstrap**: market seeding, route network and player setup
//! - **Simulation**: the session object and its command surface
//! - **Reports**: plain records handed back to whatever drives the session
//!
//! ## Architecture
//!
//! ```text
//!                 ┌─────────────────────┐
//!                 │   Transport / CLI   │
//!                 └──────────┬──────────┘
//!                            │ commands
//!                            ▼
//!                 ┌─────────────────────┐
//!                 │     Simulation      │
//!                 │  (player, turn)     │
//!                 └──┬───────┬───────┬──┘
//!                    │       │       │
//!          ┌─────────┘       │       └──────────┐
//!          ▼                 ▼                  ▼
//! ┌─────────────────┐ ┌──────────────┐ ┌──────────────────┐
//! │  MarketEngine   │ │  RouteGraph  │ │ KnapsackOptimizer│
//! │ (prices, views) │ │  (Dijkstra)  │ │   (allocation)   │
//! └─────────────────┘ └──────────────┘ └──────────────────┘
//! ```

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod reports;
pub mod simulation;

// Re-export main types
pub use bootstrap::{SimulationBootstrap, standard_routes};
pub use config::SimulationConfig;
pub use error::{Result, SimulationError};
pub use reports::{
    OptimizationReport, PlayerState, Recommendation, RiskLevel, RouteReport, SaleEstimate,
    TradeOutcome, TurnReport,
};
pub use simulation::Simulation;

// Re-export for convenience
pub use keyo_core::{ResourceView, SortKey};
pub use keyo_market::MarketStatistics;
pub use keyo_ports::{ReasonCode, RouteError, TradeError};
