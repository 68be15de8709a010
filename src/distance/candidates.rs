//! Candidate neighbour sets (k nearest candidates per node).

use super::DistanceMatrix;
use crate::models::Node;

/// For every node, the `k` nearest nodes a construction heuristic should
/// consider moving to next.
///
/// A node's candidates exclude itself, the depot and the members of its own
/// cluster. Candidates are ordered nearest first, ties by node id.
///
/// # Examples
///
/// ```
/// use u_gvrp::models::Node;
/// use u_gvrp::distance::{CandidateSet, DistanceMatrix};
///
/// let nodes = vec![Node::new(1, 0, 0), Node::new(2, 1, 0), Node::new(3, 9, 0)];
/// let dm = DistanceMatrix::from_nodes(&nodes);
/// let candidates = CandidateSet::new(&nodes, &nodes[0], &dm, 1);
/// assert_eq!(candidates.neighbors(3), &[2]);
/// ```
#[derive(Debug, Clone)]
pub struct CandidateSet {
    k: usize,
    neighbors: Vec<Vec<usize>>,
}

impl CandidateSet {
    /// Computes the candidate sets of `nodes`, whose indices must match the
    /// rows of `distances`.
    pub fn new(nodes: &[Node], depot: &Node, distances: &DistanceMatrix, k: usize) -> Self {
        let neighbors = nodes
            .iter()
            .enumerate()
            .map(|(i, node)| {
                let pool: Vec<usize> = nodes
                    .iter()
                    .enumerate()
                    .filter(|(j, other)| {
                        *j != i
                            && *other != depot
                            && (node.cluster_id().is_none()
                                || other.cluster_id() != node.cluster_id())
                    })
                    .map(|(j, _)| j)
                    .collect();

                distances
                    .nearest(i, &pool, k)
                    .into_iter()
                    .map(|j| nodes[j].id())
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();

        for (node, ids) in nodes.iter().zip(&neighbors) {
            tracing::trace!(node = node.id(), candidates = ?ids, "candidate set");
        }

        Self { k, neighbors }
    }

    /// The configured set size.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Candidate node ids of the node with the given id.
    ///
    /// Empty for an unknown id.
    pub fn neighbors(&self, node_id: usize) -> &[usize] {
        node_id
            .checked_sub(1)
            .and_then(|i| self.neighbors.get(i))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
