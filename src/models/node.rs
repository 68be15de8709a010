//! Node type.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A node (customer or depot) of an instance.
///
/// Identity is the id alone: two nodes compare equal, hash and order the same
/// whenever their ids match, whatever their coordinates.
///
/// # Examples
///
/// ```
/// use u_gvrp::models::Node;
///
/// let a = Node::new(1, 0, 0);
/// let b = Node::new(1, 5, 5);
/// assert_eq!(a, b);
/// assert_eq!(a.distance_to(&Node::new(2, 3, 4)), 5.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Node {
    id: usize,
    x: i32,
    y: i32,
    cluster_id: Option<usize>,
}

impl Node {
    /// Creates a node with no cluster membership.
    pub fn new(id: usize, x: i32, y: i32) -> Self {
        Self {
            id,
            x,
            y,
            cluster_id: None,
        }
    }

    pub(crate) fn in_cluster(mut self, cluster_id: usize) -> Self {
        self.cluster_id = Some(cluster_id);
        self
    }

    /// Node id (1-based).
    pub fn id(&self) -> usize {
        self.id
    }

    /// X-coordinate.
    pub fn x(&self) -> i32 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> i32 {
        self.y
    }

    /// Coordinates as a pair.
    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// Id of the owning cluster, `None` for a depot-eligible node.
    pub fn cluster_id(&self) -> Option<usize> {
        self.cluster_id
    }

    /// EUC_2D distance: Euclidean distance rounded to the nearest integer.
    pub fn distance_to(&self, other: &Node) -> f64 {
        let dx = (self.x as i64 - other.x as i64) as f64;
        let dy = (self.y as i64 - other.y as i64) as f64;
        (dx * dx + dy * dy).sqrt().round()
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Node {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "C{} = ({}, {})", self.id, self.x, self.y)
    }
}
