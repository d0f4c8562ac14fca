use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::LocationId;

/// Undirected connection between two locations
///
/// Registering an edge makes it traversable in both directions with the same
/// distance and cost. Distance is physical length, cost is what route search
/// minimizes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteEdge {
    pub a: LocationId,
    pub b: LocationId,
    pub distance: Decimal,
    pub cost: Decimal,
}

impl RouteEdge {
    pub fn new(
        a: impl Into<LocationId>,
        b: impl Into<LocationId>,
        distance: Decimal,
        cost: Decimal,
    ) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
            distance,
            cost,
        }
    }

    /// Both weights must be strictly positive
    pub fn is_valid(&self) -> bool {
        self.distance > Decimal::ZERO && self.cost > Decimal::ZERO
    }
}
