use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};

use indexmap::IndexMap;
use keyo_core::{LocationId, RouteEdge, RoutePlan};
use keyo_ports::{RouteError, RoutePlanner, RouteResult};
use log::debug;
use priority_queue::PriorityQueue;
use rust_decimal::Decimal;

/// One traversable direction of an edge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Neighbor {
    pub location: LocationId,
    pub distance: Decimal,
    pub cost: Decimal,
}

/// Undirected multigraph of locations
///
/// Parallel edges and multiple routes between two locations are allowed;
/// route search picks the cheapest. Weights are validated on insertion, so
/// the graph never holds a non-positive edge.
#[derive(Debug, Clone, Default)]
pub struct RouteGraph {
    adjacency: IndexMap<LocationId, Vec<Neighbor>>,
    edges: Vec<RouteEdge>,
}

impl RouteGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from a list of edges
    pub fn from_edges(edges: impl IntoIterator<Item = RouteEdge>) -> RouteResult<Self> {
        let mut graph = Self::new();
        for edge in edges {
            graph.add_route(edge)?;
        }
        Ok(graph)
    }

    /// Register an edge in both directions with identical distance and cost
    pub fn add_route(&mut self, edge: RouteEdge) -> RouteResult<()> {
        if !edge.is_valid() {
            return Err(RouteError::InvalidEdge {
                a: edge.a,
                b: edge.b,
                distance: edge.distance,
                cost: edge.cost,
            });
        }

        self.adjacency
            .entry(edge.a.clone())
            .or_default()
            .push(Neighbor {
                location: edge.b.clone(),
                distance: edge.distance,
                cost: edge.cost,
            });
        self.adjacency
            .entry(edge.b.clone())
            .or_default()
            .push(Neighbor {
                location: edge.a.clone(),
                distance: edge.distance,
                cost: edge.cost,
            });
        self.edges.push(edge);
        Ok(())
    }

    /// Locations in first-registered order
    pub fn locations(&self) -> impl Iterator<Item = &LocationId> {
        self.adjacency.keys()
    }

    /// Outgoing links of a location (empty if unknown)
    pub fn neighbors(&self, location: &LocationId) -> &[Neighbor] {
        self.adjacency
            .get(location)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Number of registered (undirected) edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn location_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edges(&self) -> &[RouteEdge] {
        &self.edges
    }

    fn trace_path<'a>(
        previous: &HashMap<&'a LocationId, &'a LocationId>,
        origin: &'a LocationId,
        destination: &'a LocationId,
    ) -> Vec<LocationId> {
        let mut path = vec![destination.clone()];
        let mut current = destination;
        while current != origin {
            match previous.get(current) {
                Some(prev) => {
                    path.push((*prev).clone());
                    current = *prev;
                }
                None => break,
            }
        }
        path.reverse();
        path
    }
}

impl RoutePlanner for RouteGraph {
    fn name(&self) -> &str {
        "Dijkstra (min cost)"
    }

    fn contains(&self, location: &LocationId) -> bool {
        self.adjacency.contains_key(location)
    }

    /// Lowest-cost-first search; a location is final once popped and its
    /// tentative cost is only replaced by a strictly cheaper one. Distance is
    /// carried along with the cost of the chosen path.
    fn shortest_path(
        &self,
        origin: &LocationId,
        destination: &LocationId,
    ) -> RouteResult<RoutePlan> {
        for endpoint in [origin, destination] {
            if !self.contains(endpoint) {
                return Err(RouteError::UnknownLocation(endpoint.clone()));
            }
        }

        let mut best_cost: HashMap<&LocationId, Decimal> = HashMap::new();
        let mut best_distance: HashMap<&LocationId, Decimal> = HashMap::new();
        let mut previous: HashMap<&LocationId, &LocationId> = HashMap::new();
        let mut finalized: HashSet<&LocationId> = HashSet::new();
        let mut queue: PriorityQueue<&LocationId, Reverse<Decimal>> = PriorityQueue::new();

        best_cost.insert(origin, Decimal::ZERO);
        best_distance.insert(origin, Decimal::ZERO);
        queue.push(origin, Reverse(Decimal::ZERO));

        while let Some((current, Reverse(cost))) = queue.pop() {
            if !finalized.insert(current) {
                continue;
            }

            if current == destination {
                let distance = best_distance.get(current).copied().unwrap_or_default();
                let path = Self::trace_path(&previous, origin, destination);
                debug!(
                    "Route {} -> {}: cost={}, distance={}, hops={}",
                    origin,
                    destination,
                    cost,
                    distance,
                    path.len() - 1
                );
                return Ok(RoutePlan {
                    distance,
                    cost,
                    path,
                });
            }

            let distance_here = best_distance.get(current).copied().unwrap_or_default();
            for link in self.neighbors(current) {
                let next = &link.location;
                if finalized.contains(next) {
                    continue;
                }

                let new_cost = cost + link.cost;
                if best_cost.get(next).is_none_or(|known| new_cost < *known) {
                    best_cost.insert(next, new_cost);
                    best_distance.insert(next, distance_here + link.distance);
                    previous.insert(next, current);
                    queue.push_increase(next, Reverse(new_cost));
                }
            }
        }

        Err(RouteError::Unreachable {
            origin: origin.clone(),
            destination: destination.clone(),
        })
    }
}
