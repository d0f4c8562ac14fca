use keyo_core::{LocationId, RoutePlan};

use crate::error::RouteResult;

/// Port for route search over the location network
///
/// Implementations decide what "best" means; the shipped one minimizes
/// cumulative cost and reports distance along the chosen path.
pub trait RoutePlanner {
    /// Find the best route from `origin` to `destination`
    ///
    /// Fails when either endpoint is unknown or no path connects them.
    fn shortest_path(&self, origin: &LocationId, destination: &LocationId)
    -> RouteResult<RoutePlan>;

    /// Whether the location is part of the network
    fn contains(&self, location: &LocationId) -> bool;

    /// Get the name of the planner
    fn name(&self) -> &str;
}
