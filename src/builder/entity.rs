//! Node and cluster drafts.

use crate::error::{GvrpError, Result};
use crate::models::{Cluster, Node};

/// Mutable draft of a [`Node`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeBuilder {
    id: usize,
    position: Option<(i32, i32)>,
}

impl NodeBuilder {
    /// Creates a draft for the node with the given id.
    pub fn new(id: usize) -> Self {
        Self { id, position: None }
    }

    /// Sets the coordinates.
    pub fn position(&mut self, x: i32, y: i32) -> &mut Self {
        self.position = Some((x, y));
        self
    }

    /// Materializes the node, bound to `cluster_id` when given.
    pub fn build(&self, cluster_id: Option<usize>) -> Result<Node> {
        let (x, y) = self
            .position
            .ok_or(GvrpError::MissingPosition { node_id: self.id })?;
        let node = Node::new(self.id, x, y);
        Ok(match cluster_id {
            Some(c) => node.in_cluster(c),
            None => node,
        })
    }
}

/// Mutable draft of a [`Cluster`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterBuilder {
    id: usize,
    demand: Option<i32>,
}

impl ClusterBuilder {
    /// Creates a draft for the cluster with the given id.
    pub fn new(id: usize) -> Self {
        Self { id, demand: None }
    }

    /// Sets the demand, which must be non-negative.
    pub fn demand(&mut self, demand: i32) -> Result<&mut Self> {
        if demand < 0 {
            return Err(GvrpError::NegativeDemand {
                cluster_id: self.id,
                demand: i64::from(demand),
            });
        }
        self.demand = Some(demand);
        Ok(self)
    }

    /// Materializes an empty cluster; members are added while linking.
    pub(crate) fn build(&self) -> Result<Cluster> {
        let demand = self
            .demand
            .ok_or(GvrpError::MissingDemand { cluster_id: self.id })?;
        Ok(Cluster::new(self.id, demand))
    }
}
