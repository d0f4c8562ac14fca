//! Keyo Optimizer
//!
//! Inventory recommendation strategies for the Keyo trading simulation.

mod knapsack;

pub use knapsack::KnapsackOptimizer;

// Re-export the trait from ports for convenience
pub use keyo_ports::InventoryOptimizer;
