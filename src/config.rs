//! Instance construction and solution checking configuration.

use serde::{Deserialize, Serialize};

/// How the depot is inferred from nodes without cluster membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DepotPolicy {
    /// The last unassigned node (by id) supplies the depot. All nodes,
    /// including every unassigned one, remain in the customer list.
    #[default]
    LastUnassigned,
    /// Exactly one node may be unassigned. It becomes the depot and is
    /// excluded from the customer list.
    UniqueUnassigned,
}

/// Configuration applied when an instance is built.
///
/// # Examples
///
/// ```
/// use u_gvrp::config::{DepotPolicy, InstanceConfig};
///
/// let config = InstanceConfig::default()
///     .with_k(5)
///     .with_depot_policy(DepotPolicy::UniqueUnassigned);
/// assert_eq!(config.k, 5);
/// assert_eq!(config.depot_policy, DepotPolicy::UniqueUnassigned);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceConfig {
    /// Size of each node's candidate neighbour set.
    pub k: usize,
    /// Depot inference rule.
    pub depot_policy: DepotPolicy,
}

impl Default for InstanceConfig {
    fn default() -> Self {
        Self {
            k: 20,
            depot_policy: DepotPolicy::default(),
        }
    }
}

impl InstanceConfig {
    /// Sets the candidate neighbour set size.
    pub fn with_k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    /// Sets the depot inference rule.
    pub fn with_depot_policy(mut self, policy: DepotPolicy) -> Self {
        self.depot_policy = policy;
        self
    }
}

/// Configuration of the solution checker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckerConfig {
    /// Also require every cluster to be visited through exactly one member.
    pub cluster_coverage: bool,
}

impl CheckerConfig {
    /// Enables or disables the cluster coverage rule.
    pub fn with_cluster_coverage(mut self, enabled: bool) -> Self {
        self.cluster_coverage = enabled;
        self
    }
}
