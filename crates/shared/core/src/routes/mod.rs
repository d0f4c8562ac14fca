mod edge;
mod location;
mod plan;

pub use edge::RouteEdge;
pub use location::LocationId;
pub use plan::RoutePlan;
