//! Keyo Routing
//!
//! Undirected weighted location graph with a cheapest-cost route search.

mod graph;

pub use graph::{Neighbor, RouteGraph};

// Re-export the trait from ports for convenience
pub use keyo_ports::{RouteError, RoutePlanner, RouteResult};
