//! Error types for instance parsing and construction.

use std::fmt;

/// Kind of entity addressed by a dense 1-based id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// A node (customer or depot).
    Node,
    /// A cluster (customer set).
    Cluster,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Node => f.write_str("node"),
            EntityKind::Cluster => f.write_str("cluster"),
        }
    }
}

/// Coarse classification of a [`GvrpError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// Expected keyword, section or token not found, or required data missing.
    Structural,
    /// Non-positive count, out-of-range id or negative demand.
    Range,
    /// The depot could not be inferred from cluster membership.
    Reference,
    /// Reading the input failed.
    Io,
}

/// Errors raised while reading or building an instance.
///
/// Every error aborts the pipeline; no partially built instance is returned.
#[derive(Debug, thiserror::Error)]
pub enum GvrpError {
    /// A token did not match the grammar.
    #[error("line {line}: expected {expected}, got '{found}'")]
    UnexpectedToken {
        /// Line of the offending token (1-based).
        line: usize,
        /// What the grammar required.
        expected: String,
        /// The token actually read.
        found: String,
    },

    /// Input ended before the grammar was satisfied.
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof {
        /// What the grammar required.
        expected: String,
    },

    /// A token expected to be an integer could not be parsed.
    #[error("line {line}: expected integer, got '{token}'")]
    InvalidInteger {
        /// Line of the offending token (1-based).
        line: usize,
        /// The token actually read.
        token: String,
    },

    /// A required count or capacity was zero or negative.
    #[error("{field} must be a positive number, got {value}")]
    NonPositive {
        /// Name of the field.
        field: &'static str,
        /// Value supplied.
        value: i64,
    },

    /// An id reference fell outside its allocated range.
    #[error("{entity} id {id} is out of range 1..={max}")]
    IdOutOfRange {
        /// Entity addressed.
        entity: EntityKind,
        /// Id supplied.
        id: i64,
        /// Number of allocated entities.
        max: usize,
    },

    /// A cluster demand was negative.
    #[error("cluster {cluster_id} has negative demand {demand}")]
    NegativeDemand {
        /// Cluster id.
        cluster_id: usize,
        /// Demand supplied.
        demand: i64,
    },

    /// A node never received coordinates.
    #[error("node {node_id} has no coordinates")]
    MissingPosition {
        /// Node id.
        node_id: usize,
    },

    /// A cluster never received a demand.
    #[error("cluster {cluster_id} has no demand")]
    MissingDemand {
        /// Cluster id.
        cluster_id: usize,
    },

    /// Every node belongs to a cluster, so there is no depot.
    #[error("every node belongs to a cluster, cannot infer depot")]
    MissingDepot,

    /// More than one node has no cluster membership.
    #[error("nodes {node_ids:?} have no cluster membership, expected exactly one depot")]
    AmbiguousDepot {
        /// Ids of all unassigned nodes.
        node_ids: Vec<usize>,
    },

    /// Reading the input failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl GvrpError {
    /// Maps this error onto its [`ErrorClass`].
    pub fn class(&self) -> ErrorClass {
        match self {
            GvrpError::UnexpectedToken { .. }
            | GvrpError::UnexpectedEof { .. }
            | GvrpError::InvalidInteger { .. }
            | GvrpError::MissingPosition { .. }
            | GvrpError::MissingDemand { .. } => ErrorClass::Structural,
            GvrpError::NonPositive { .. }
            | GvrpError::IdOutOfRange { .. }
            | GvrpError::NegativeDemand { .. } => ErrorClass::Range,
            GvrpError::MissingDepot | GvrpError::AmbiguousDepot { .. } => ErrorClass::Reference,
            GvrpError::Io(_) => ErrorClass::Io,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GvrpError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_mapping() {
        let structural = GvrpError::UnexpectedEof {
            expected: "DIMENSION".to_string(),
        };
        assert_eq!(structural.class(), ErrorClass::Structural);

        let range = GvrpError::IdOutOfRange {
            entity: EntityKind::Node,
            id: 7,
            max: 4,
        };
        assert_eq!(range.class(), ErrorClass::Range);

        assert_eq!(GvrpError::MissingDepot.class(), ErrorClass::Reference);

        let io = GvrpError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(io.class(), ErrorClass::Io);
    }

    #[test]
    fn test_messages() {
        let e = GvrpError::IdOutOfRange {
            entity: EntityKind::Cluster,
            id: 0,
            max: 3,
        };
        assert_eq!(e.to_string(), "cluster id 0 is out of range 1..=3");

        let e = GvrpError::NonPositive {
            field: "DIMENSION",
            value: -2,
        };
        assert_eq!(e.to_string(), "DIMENSION must be a positive number, got -2");

        let e = GvrpError::UnexpectedToken {
            line: 3,
            expected: "':'".to_string(),
            found: "4".to_string(),
        };
        assert_eq!(e.to_string(), "line 3: expected ':', got '4'");
    }
}
