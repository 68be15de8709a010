//! Route type.

use super::{Instance, Node};
use crate::distance::DistanceMatrix;
use std::fmt;

/// One vehicle's ordered visiting sequence.
///
/// A route starts and ends at its depot, which is not stored in `visited`.
///
/// # Examples
///
/// ```
/// use u_gvrp::models::{Node, Route};
///
/// let mut route = Route::new(1, Node::new(4, 0, 0), 10);
/// route.push(Node::new(2, 3, 4));
/// assert_eq!(route.len(), 1);
/// assert_eq!(route.node_ids(), vec![2]);
/// ```
#[derive(Debug, Clone)]
pub struct Route {
    index: usize,
    depot: Node,
    capacity_limit: i32,
    visited: Vec<Node>,
}

impl Route {
    /// Creates an empty route.
    pub fn new(index: usize, depot: Node, capacity_limit: i32) -> Self {
        Self {
            index,
            depot,
            capacity_limit,
            visited: Vec::new(),
        }
    }

    /// Appends a node to the end of this route.
    pub fn push(&mut self, node: Node) {
        self.visited.push(node);
    }

    /// Route index within its solution (1-based).
    pub fn index(&self) -> usize {
        self.index
    }

    /// The depot this route is anchored at.
    pub fn depot(&self) -> &Node {
        &self.depot
    }

    /// Maximum load this route's vehicle carries.
    pub fn capacity_limit(&self) -> i32 {
        self.capacity_limit
    }

    /// Visited nodes in order.
    pub fn visited(&self) -> &[Node] {
        &self.visited
    }

    /// Number of visited nodes.
    pub fn len(&self) -> usize {
        self.visited.len()
    }

    /// Returns `true` if this route visits no node.
    pub fn is_empty(&self) -> bool {
        self.visited.is_empty()
    }

    /// Visited node ids in order.
    pub fn node_ids(&self) -> Vec<usize> {
        self.visited.iter().map(|n| n.id()).collect()
    }

    /// Accumulated demand: the owning-cluster demand of every visited node.
    pub fn load(&self, instance: &Instance) -> i64 {
        self.visited
            .iter()
            .map(|n| i64::from(instance.demand_of(n.id())))
            .sum()
    }

    /// Tour length depot → visited… → depot; zero for an empty route.
    ///
    /// The matrix is indexed by node id minus one. A leg touching a node the
    /// matrix does not cover costs `f64::INFINITY`.
    pub fn cost(&self, distances: &DistanceMatrix) -> f64 {
        if self.visited.is_empty() {
            return 0.0;
        }
        let leg = |from: &Node, to: &Node| match (from.id().checked_sub(1), to.id().checked_sub(1)) {
            (Some(i), Some(j)) => distances.try_get(i, j).unwrap_or(f64::INFINITY),
            _ => f64::INFINITY,
        };
        let mut total = 0.0;
        let mut prev = &self.depot;
        for node in &self.visited {
            total += leg(prev, node);
            prev = node;
        }
        total + leg(prev, &self.depot)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{} = [{}", self.index, self.depot.id())?;
        for node in &self.visited {
            write!(f, " -> {}", node.id())?;
        }
        write!(f, " -> {}]", self.depot.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nodes() -> Vec<Node> {
        vec![Node::new(1, 0, 0), Node::new(2, 3, 4), Node::new(3, 6, 8)]
    }

    #[test]
    fn test_route_empty() {
        let r = Route::new(1, Node::new(1, 0, 0), 10);
        assert!(r.is_empty());
        assert_eq!(r.len(), 0);
        assert_eq!(r.index(), 1);
        assert_eq!(r.capacity_limit(), 10);
        assert_eq!(r.depot().id(), 1);
        let dm = DistanceMatrix::from_nodes(&nodes());
        assert_eq!(r.cost(&dm), 0.0);
    }

    #[test]
    fn test_route_push() {
        let ns = nodes();
        let mut r = Route::new(2, ns[0], 10);
        r.push(ns[2]);
        r.push(ns[1]);
        assert_eq!(r.len(), 2);
        assert_eq!(r.node_ids(), vec![3, 2]);
        assert_eq!(r.visited()[0].position(), (6, 8));
    }

    #[test]
    fn test_route_cost_round_trip() {
        let ns = nodes();
        let dm = DistanceMatrix::from_nodes(&ns);
        let mut r = Route::new(1, ns[0], 10);
        r.push(ns[1]);
        // depot->2 = 5, 2->depot = 5
        assert!((r.cost(&dm) - 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_route_cost_chain() {
        let ns = nodes();
        let dm = DistanceMatrix::from_nodes(&ns);
        let mut r = Route::new(1, ns[0], 10);
        r.push(ns[1]);
        r.push(ns[2]);
        // 5 + 5 + 10
        assert!((r.cost(&dm) - 20.0).abs() < 1e-10);
    }

    #[test]
    fn test_route_cost_unknown_node() {
        let ns = nodes();
        let dm = DistanceMatrix::from_nodes(&ns);
        let mut r = Route::new(1, ns[0], 10);
        r.push(Node::new(7, 1, 1));
        assert_eq!(r.cost(&dm), f64::INFINITY);

        let mut r = Route::new(1, Node::new(0, 0, 0), 10);
        r.push(ns[1]);
        assert_eq!(r.cost(&dm), f64::INFINITY);
    }

    #[test]
    fn test_display() {
        let ns = nodes();
        let mut r = Route::new(3, ns[0], 10);
        r.push(ns[2]);
        r.push(ns[1]);
        assert_eq!(r.to_string(), "R3 = [1 -> 3 -> 2 -> 1]");
    }
}
