//! Keyo Core Domain
//!
//! Pure domain types for the Keyo trading simulation.
//! This crate contains no I/O and no randomness; anything random is handed in
//! by the caller, so everything here is 100% unit testable.

pub mod entities;
pub mod routes;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{
    // Optimizer inputs/outputs
    Allocation,
    Offer,
    // Trading entities
    Player,
    Resource,
    ResourceView,
    Side,
    SortKey,
    TradeId,
    TradeReceipt,
};
pub use routes::{LocationId, RouteEdge, RoutePlan};
pub use values::{Price, Quantity, ResourceName, Timestamp, Weight};
