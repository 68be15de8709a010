//! Solution and violation types.

use super::{Instance, Route};
use std::fmt;
use std::sync::Arc;

/// A reason a solution is illegal.
#[derive(Debug, Clone, PartialEq)]
pub enum ViolationType {
    /// A route visits a node id the instance does not define.
    UnknownNode {
        /// Route index (1-based).
        route_index: usize,
        /// Offending node id.
        node_id: usize,
    },
    /// A route's accumulated demand exceeds the vehicle capacity.
    CapacityExceeded {
        /// Route index (1-based).
        route_index: usize,
        /// Accumulated demand of the route.
        load: i64,
        /// Vehicle capacity.
        capacity: i32,
    },
    /// A route visits no node.
    EmptyRoute {
        /// Route index (1-based).
        route_index: usize,
    },
    /// A route visits a node already visited, by itself or an earlier route.
    OverlappingRoutes {
        /// Index of the route where the overlap was detected (1-based).
        route_index: usize,
    },
    /// A cluster is visited through more than one member.
    ClusterVisitedTwice {
        /// Cluster id.
        cluster_id: usize,
    },
    /// No member of a cluster is visited.
    ClusterNotCovered {
        /// Cluster id.
        cluster_id: usize,
    },
}

/// A constraint violation in a solution.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    /// The type of violation.
    pub kind: ViolationType,
}

impl Violation {
    /// Creates a new violation.
    pub fn new(kind: ViolationType) -> Self {
        Self { kind }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ViolationType::UnknownNode {
                route_index,
                node_id,
            } => write!(f, "route {route_index} visits unknown node {node_id}"),
            ViolationType::CapacityExceeded {
                route_index,
                load,
                capacity,
            } => write!(
                f,
                "route {route_index} capacity surpasses maximum ({load} > {capacity})"
            ),
            ViolationType::EmptyRoute { route_index } => write!(f, "route {route_index} is empty"),
            ViolationType::OverlappingRoutes { route_index } => {
                write!(f, "route {route_index} overlaps previously visited nodes")
            }
            ViolationType::ClusterVisitedTwice { cluster_id } => {
                write!(f, "cluster {cluster_id} visited more than once")
            }
            ViolationType::ClusterNotCovered { cluster_id } => {
                write!(f, "cluster {cluster_id} not visited")
            }
        }
    }
}

/// A partition of nodes into one route per vehicle.
///
/// Holds a shared reference to its instance; any number of solutions may
/// point at the same instance.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use u_gvrp::config::InstanceConfig;
/// use u_gvrp::format::parse_instance;
/// use u_gvrp::models::Solution;
///
/// let text = "NAME : tiny COMMENT : GVRP DIMENSION : 2 VEHICLES : 1 GVRP_SETS : 1 \
///             CAPACITY : 5 EDGE_WEIGHT_TYPE : EUC_2D NODE_COORD_SECTION 1 0 0 2 3 4 \
///             GVRP_SET_SECTION 1 2 -1 DEMAND_SECTION 1 5";
/// let instance = Arc::new(parse_instance(text, &InstanceConfig::default()).unwrap());
/// let solution = Solution::new(instance);
/// assert_eq!(solution.num_routes(), 1);
/// assert!(solution.routes()[0].is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Solution {
    instance: Arc<Instance>,
    routes: Vec<Route>,
}

impl Solution {
    /// Creates a solution with one empty route per vehicle, indexed from 1.
    pub fn new(instance: Arc<Instance>) -> Self {
        let routes = (1..=instance.fleet_size())
            .map(|i| Route::new(i, *instance.depot(), instance.vehicle_capacity()))
            .collect();
        Self { instance, routes }
    }

    /// The instance this solution belongs to.
    pub fn instance(&self) -> &Arc<Instance> {
        &self.instance
    }

    /// Routes in index order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Mutable access to the routes.
    pub fn routes_mut(&mut self) -> &mut [Route] {
        &mut self.routes
    }

    /// Mutable access to the route with the given 1-based index.
    pub fn route_mut(&mut self, index: usize) -> Option<&mut Route> {
        index.checked_sub(1).and_then(|i| self.routes.get_mut(i))
    }

    /// Number of routes.
    pub fn num_routes(&self) -> usize {
        self.routes.len()
    }

    /// Total number of visits across all routes.
    pub fn num_visited(&self) -> usize {
        self.routes.iter().map(|r| r.len()).sum()
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, route) in self.routes.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{route}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::small_instance;

    #[test]
    fn test_solution_new() {
        let inst = small_instance();
        let sol = Solution::new(inst.clone());
        assert_eq!(sol.num_routes(), 2);
        assert_eq!(sol.num_visited(), 0);
        for (i, route) in sol.routes().iter().enumerate() {
            assert_eq!(route.index(), i + 1);
            assert_eq!(route.depot().id(), 1);
            assert_eq!(route.capacity_limit(), 10);
        }
        assert!(Arc::ptr_eq(sol.instance(), &inst));
    }

    #[test]
    fn test_route_mut() {
        let inst = small_instance();
        let mut sol = Solution::new(inst.clone());
        let node = *inst.node(2).expect("node 2");
        sol.route_mut(2).expect("route 2").push(node);
        assert!(sol.route_mut(0).is_none());
        assert!(sol.route_mut(3).is_none());
        assert_eq!(sol.routes()[1].node_ids(), vec![2]);
        assert_eq!(sol.num_visited(), 1);
        assert_eq!(sol.to_string(), "R1 = [1 -> 1]\nR2 = [1 -> 2 -> 1]");
    }

    #[test]
    fn test_route_load() {
        let inst = small_instance();
        let mut sol = Solution::new(inst.clone());
        for id in [2, 4, 1] {
            let node = *inst.node(id).expect("node");
            sol.routes_mut()[0].push(node);
        }
        // 4 + 5 + depot 0
        assert_eq!(sol.routes()[0].load(&inst), 9);
    }

    #[test]
    fn test_violation_display() {
        let v = Violation::new(ViolationType::CapacityExceeded {
            route_index: 1,
            load: 12,
            capacity: 10,
        });
        assert_eq!(v.to_string(), "route 1 capacity surpasses maximum (12 > 10)");
        let v = Violation::new(ViolationType::EmptyRoute { route_index: 2 });
        assert_eq!(v.to_string(), "route 2 is empty");
        let v = Violation::new(ViolationType::UnknownNode {
            route_index: 1,
            node_id: 7,
        });
        assert_eq!(v.to_string(), "route 1 visits unknown node 7");
    }
}
