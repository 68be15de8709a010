//! Cluster (customer set) type.

use super::Node;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A group of interchangeable nodes sharing one demand.
///
/// Visiting any single member satisfies the cluster's demand. Members are
/// unique by node id and kept in ascending id order. Identity is the id alone.
#[derive(Debug, Clone)]
pub struct Cluster {
    id: usize,
    demand: i32,
    members: Vec<Node>,
}

impl Cluster {
    pub(crate) fn new(id: usize, demand: i32) -> Self {
        Self {
            id,
            demand,
            members: Vec::new(),
        }
    }

    pub(crate) fn add_member(&mut self, node: Node) {
        if let Err(pos) = self.members.binary_search(&node) {
            self.members.insert(pos, node);
        }
    }

    /// Cluster id (1-based).
    pub fn id(&self) -> usize {
        self.id
    }

    /// Demand satisfied by visiting one member.
    pub fn demand(&self) -> i32 {
        self.demand
    }

    /// Member nodes in ascending id order.
    pub fn members(&self) -> &[Node] {
        &self.members
    }

    /// Number of member nodes.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if the cluster has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Returns `true` if the node with the given id is a member.
    pub fn contains(&self, node_id: usize) -> bool {
        self.members.binary_search_by_key(&node_id, |n| n.id()).is_ok()
    }

    /// Short form, e.g. `S3`.
    pub fn to_compact_string(&self) -> String {
        format!("S{}", self.id)
    }
}

impl PartialEq for Cluster {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Cluster {}

impl Hash for Cluster {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{} = {{ demand = {}, customers = [", self.id, self.demand)?;
        for (i, node) in self.members.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{node}")?;
        }
        f.write_str("] }")
    }
}
