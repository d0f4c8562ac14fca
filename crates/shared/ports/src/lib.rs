//! Keyo Ports
//!
//! Port definitions (traits) and the error taxonomy for the Keyo trading
//! simulation. These define the boundaries between domain logic and the
//! algorithm implementations.

mod error;
mod optimizer;
mod routing;

pub use error::{ReasonCode, RouteError, RouteResult, TradeError, TradeResult};
pub use optimizer::InventoryOptimizer;
pub use routing::RoutePlanner;
