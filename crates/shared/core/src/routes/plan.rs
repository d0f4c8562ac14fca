use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::LocationId;

/// Cheapest route found between two locations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutePlan {
    /// Distance accumulated along the chosen path (not itself minimized)
    pub distance: Decimal,
    /// Total cost of the chosen path (minimized)
    pub cost: Decimal,
    /// Ordered locations from origin to destination, both included
    pub path: Vec<LocationId>,
}

impl RoutePlan {
    /// Plan for a trip that never leaves `location`
    pub fn stay(location: LocationId) -> Self {
        Self {
            distance: Decimal::ZERO,
            cost: Decimal::ZERO,
            path: vec![location],
        }
    }

    pub fn origin(&self) -> Option<&LocationId> {
        self.path.first()
    }

    pub fn destination(&self) -> Option<&LocationId> {
        self.path.last()
    }

    /// Number of edges traversed
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}
