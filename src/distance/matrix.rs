//! Dense distance matrix.

use crate::models::Node;

/// A dense n×n distance matrix stored in row-major order.
///
/// Rows and columns follow the order of the node slice the matrix was built
/// from; for an instance that is node id minus one.
///
/// # Examples
///
/// ```
/// use u_gvrp::models::Node;
/// use u_gvrp::distance::DistanceMatrix;
///
/// let nodes = vec![Node::new(1, 0, 0), Node::new(2, 3, 4), Node::new(3, 6, 8)];
/// let dm = DistanceMatrix::from_nodes(&nodes);
/// assert_eq!(dm.get(0, 1), 5.0);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes an EUC_2D distance matrix from node coordinates.
    pub fn from_nodes(nodes: &[Node]) -> Self {
        let n = nodes.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = nodes[i].distance_to(&nodes[j]);
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    /// Returns the distance from index `from` to index `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Returns the distance from index `from` to index `to`, or `None` if
    /// either index is outside the matrix.
    pub fn try_get(&self, from: usize, to: usize) -> Option<f64> {
        if from >= self.size || to >= self.size {
            return None;
        }
        Some(self.data[from * self.size + to])
    }

    /// Sets the distance from index `from` to index `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns up to `k` of the given candidates, nearest to `from` first.
    ///
    /// Ties are broken by ascending index.
    pub fn nearest(&self, from: usize, candidates: &[usize], k: usize) -> Vec<usize> {
        let mut sorted = candidates.to_vec();
        sorted.sort_by(|&a, &b| {
            self.get(from, a)
                .total_cmp(&self.get(from, b))
                .then(a.cmp(&b))
        });
        sorted.truncate(k);
        sorted
    }
}
