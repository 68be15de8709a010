//! Solution checker.

use crate::config::CheckerConfig;
use crate::models::{Node, Solution, Violation, ViolationType};
use std::collections::HashSet;

/// Decides whether a solution is legal and what it costs.
///
/// The default rules reject a solution when a route visits a node the
/// instance does not define, exceeds the vehicle capacity, is empty, or
/// visits a node already visited. [`CheckerConfig::cluster_coverage`] adds
/// the clustered rule: every cluster visited through exactly one member.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use u_gvrp::config::InstanceConfig;
/// use u_gvrp::evaluation::SolutionChecker;
/// use u_gvrp::format::parse_instance;
/// use u_gvrp::models::Solution;
///
/// let text = "NAME : tiny COMMENT : GVRP DIMENSION : 2 VEHICLES : 1 GVRP_SETS : 1 \
///             CAPACITY : 5 EDGE_WEIGHT_TYPE : EUC_2D NODE_COORD_SECTION 1 0 0 2 3 4 \
///             GVRP_SET_SECTION 1 2 -1 DEMAND_SECTION 1 5";
/// let instance = Arc::new(parse_instance(text, &InstanceConfig::default()).unwrap());
/// let mut solution = Solution::new(instance.clone());
///
/// let checker = SolutionChecker::default();
/// assert!(!checker.is_valid(&solution)); // the only route is empty
///
/// solution.routes_mut()[0].push(*instance.node(2).unwrap());
/// assert!(checker.is_valid(&solution));
/// assert_eq!(checker.cost(&solution), 10.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SolutionChecker {
    config: CheckerConfig,
}

impl SolutionChecker {
    /// Creates a checker with the default rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a checker with the given configuration.
    pub fn with_config(config: CheckerConfig) -> Self {
        Self { config }
    }

    /// Returns `true` if the solution breaks no rule.
    pub fn is_valid(&self, solution: &Solution) -> bool {
        match self.first_violation(solution) {
            Some(violation) => {
                tracing::debug!(reason = %violation, "solution rejected");
                false
            }
            None => true,
        }
    }

    /// Returns the first rule the solution breaks, checking routes in order.
    pub fn first_violation(&self, solution: &Solution) -> Option<Violation> {
        let instance = solution.instance();
        let capacity = instance.vehicle_capacity();

        let mut seen: HashSet<usize> = HashSet::new();
        let mut visits = 0;
        for route in solution.routes() {
            if let Some(node) = route
                .visited()
                .iter()
                .find(|n| instance.node(n.id()).is_none())
            {
                return Some(Violation::new(ViolationType::UnknownNode {
                    route_index: route.index(),
                    node_id: node.id(),
                }));
            }
            let load = route.load(instance);
            if load > i64::from(capacity) {
                return Some(Violation::new(ViolationType::CapacityExceeded {
                    route_index: route.index(),
                    load,
                    capacity,
                }));
            }
            if route.is_empty() {
                return Some(Violation::new(ViolationType::EmptyRoute {
                    route_index: route.index(),
                }));
            }
            // A repeated node leaves the set smaller than the visit count.
            visits += route.len();
            seen.extend(route.visited().iter().map(Node::id));
            if visits != seen.len() {
                return Some(Violation::new(ViolationType::OverlappingRoutes {
                    route_index: route.index(),
                }));
            }
        }

        if self.config.cluster_coverage {
            return coverage_violation(solution);
        }
        None
    }

    /// Sum of every route's depot-anchored tour length.
    ///
    /// Infinite when a route visits a node outside the instance.
    pub fn cost(&self, solution: &Solution) -> f64 {
        let distances = solution.instance().distances();
        solution.routes().iter().map(|r| r.cost(distances)).sum()
    }
}

fn coverage_violation(solution: &Solution) -> Option<Violation> {
    let instance = solution.instance();
    let mut visits = vec![0usize; instance.num_clusters()];
    for node in solution.routes().iter().flat_map(|r| r.visited()) {
        if let Some(cluster) = instance.cluster_of(node.id()) {
            visits[cluster.id() - 1] += 1;
        }
    }

    instance
        .clusters()
        .iter()
        .zip(&visits)
        .find_map(|(cluster, &count)| match count {
            1 => None,
            0 => Some(Violation::new(ViolationType::ClusterNotCovered {
                cluster_id: cluster.id(),
            })),
            _ => Some(Violation::new(ViolationType::ClusterVisitedTwice {
                cluster_id: cluster.id(),
            })),
        })
}

/// Checks a solution with the default rules.
pub fn is_valid(solution: &Solution) -> bool {
    SolutionChecker::default().is_valid(solution)
}

/// Total cost of a solution.
pub fn cost(solution: &Solution) -> f64 {
    SolutionChecker::default().cost(solution)
}
