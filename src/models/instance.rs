//! Immutable GVRP instance.

use super::{Cluster, Node};
use crate::distance::{CandidateSet, DistanceMatrix};
use std::fmt;

/// A fully linked Generalized VRP instance.
///
/// Produced only by [`InstanceBuilder::build`](crate::builder::InstanceBuilder::build)
/// and read-only afterwards, so it can be shared freely (e.g. behind an `Arc`)
/// between any number of solutions and threads.
///
/// Nodes are stored in ascending id order, so node `i` lives at index `i - 1`
/// of [`nodes`](Self::nodes) and of the distance matrix. The same holds for
/// clusters.
#[derive(Debug, Clone)]
pub struct Instance {
    name: String,
    depot: Node,
    nodes: Vec<Node>,
    customers: Vec<Node>,
    clusters: Vec<Cluster>,
    fleet_size: usize,
    vehicle_capacity: i32,
    distances: DistanceMatrix,
    candidates: CandidateSet,
}

impl Instance {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        name: String,
        depot: Node,
        nodes: Vec<Node>,
        customers: Vec<Node>,
        clusters: Vec<Cluster>,
        fleet_size: usize,
        vehicle_capacity: i32,
        k: usize,
    ) -> Self {
        // Candidates depend on the matrix, so it is computed first.
        let distances = DistanceMatrix::from_nodes(&nodes);
        let candidates = CandidateSet::new(&nodes, &depot, &distances, k);

        Self {
            name,
            depot,
            nodes,
            customers,
            clusters,
            fleet_size,
            vehicle_capacity,
            distances,
            candidates,
        }
    }

    /// Instance name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The depot every route starts and ends at.
    pub fn depot(&self) -> &Node {
        &self.depot
    }

    /// All nodes in ascending id order, depot included.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Nodes a route may visit.
    ///
    /// Under [`DepotPolicy::LastUnassigned`](crate::config::DepotPolicy::LastUnassigned)
    /// this is every node; under
    /// [`DepotPolicy::UniqueUnassigned`](crate::config::DepotPolicy::UniqueUnassigned)
    /// the depot is left out.
    pub fn customers(&self) -> &[Node] {
        &self.customers
    }

    /// All clusters in ascending id order.
    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }

    /// Number of vehicles.
    pub fn fleet_size(&self) -> usize {
        self.fleet_size
    }

    /// Capacity of every vehicle.
    pub fn vehicle_capacity(&self) -> i32 {
        self.vehicle_capacity
    }

    /// Candidate neighbour set size.
    pub fn k(&self) -> usize {
        self.candidates.k()
    }

    /// Number of nodes, depot included.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Number of clusters.
    pub fn num_clusters(&self) -> usize {
        self.clusters.len()
    }

    /// Pairwise EUC_2D distances, indexed by node id minus one.
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// Candidate neighbour sets.
    pub fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    /// Looks up a node by id.
    pub fn node(&self, id: usize) -> Option<&Node> {
        id.checked_sub(1).and_then(|i| self.nodes.get(i))
    }

    /// Looks up a cluster by id.
    pub fn cluster(&self, id: usize) -> Option<&Cluster> {
        id.checked_sub(1).and_then(|i| self.clusters.get(i))
    }

    /// The cluster owning the node with the given id, if any.
    pub fn cluster_of(&self, node_id: usize) -> Option<&Cluster> {
        self.node(node_id)
            .and_then(|n| n.cluster_id())
            .and_then(|c| self.cluster(c))
    }

    /// Demand carried by visiting the node; zero for unclustered nodes.
    pub fn demand_of(&self, node_id: usize) -> i32 {
        self.cluster_of(node_id).map_or(0, |c| c.demand())
    }

    /// Distance between two nodes of this instance.
    ///
    /// # Panics
    ///
    /// Panics if either node does not belong to this instance.
    pub fn distance(&self, from: &Node, to: &Node) -> f64 {
        self.distances.get(from.id() - 1, to.id() - 1)
    }
}

impl PartialEq for Instance {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl fmt::Display for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "name = {}", self.name)?;
        writeln!(f, "fleet = {}", self.fleet_size)?;
        writeln!(f, "capacity = {}", self.vehicle_capacity)?;
        writeln!(f, "depot = {}", self.depot)?;
        write!(f, "sets = ")?;
        for cluster in &self.clusters {
            write!(f, "\n{cluster}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Instance {
        let nodes = vec![
            Node::new(1, 0, 0).in_cluster(1),
            Node::new(2, 3, 4).in_cluster(1),
            Node::new(3, 6, 8).in_cluster(2),
            Node::new(4, 0, 1),
        ];
        let mut c1 = Cluster::new(1, 5);
        c1.add_member(nodes[0]);
        c1.add_member(nodes[1]);
        let mut c2 = Cluster::new(2, 3);
        c2.add_member(nodes[2]);
        Instance::new(
            "sample".to_string(),
            nodes[3],
            nodes.clone(),
            nodes,
            vec![c1, c2],
            2,
            10,
            20,
        )
    }

    #[test]
    fn test_accessors() {
        let inst = sample();
        assert_eq!(inst.name(), "sample");
        assert_eq!(inst.depot().id(), 4);
        assert_eq!(inst.num_nodes(), 4);
        assert_eq!(inst.num_clusters(), 2);
        assert_eq!(inst.fleet_size(), 2);
        assert_eq!(inst.vehicle_capacity(), 10);
        assert_eq!(inst.k(), 20);
        assert_eq!(inst.distances().size(), 4);
    }

    #[test]
    fn test_lookups() {
        let inst = sample();
        assert_eq!(inst.node(2).map(|n| n.position()), Some((3, 4)));
        assert!(inst.node(0).is_none());
        assert!(inst.node(5).is_none());
        assert_eq!(inst.cluster(2).map(|c| c.demand()), Some(3));
        assert_eq!(inst.cluster_of(3).map(|c| c.id()), Some(2));
        assert!(inst.cluster_of(4).is_none());
        assert_eq!(inst.demand_of(1), 5);
        assert_eq!(inst.demand_of(4), 0);
    }

    #[test]
    fn test_distance() {
        let inst = sample();
        let a = *inst.node(1).expect("node 1");
        let b = *inst.node(3).expect("node 3");
        assert!((inst.distance(&a, &b) - 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_display() {
        let text = sample().to_string();
        assert!(text.starts_with("name = sample\nfleet = 2\ncapacity = 10\ndepot = C4 = (0, 1)\nsets = "));
        assert!(text.contains("\nS1 = { demand = 5, customers = [C1 = (0, 0), C2 = (3, 4)] }"));
        assert!(text.ends_with("S2 = { demand = 3, customers = [C3 = (6, 8)] }"));
    }
}
