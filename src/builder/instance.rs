//! Instance builder.

use super::{ClusterBuilder, NodeBuilder};
use crate::config::{DepotPolicy, InstanceConfig};
use crate::error::{EntityKind, GvrpError, Result};
use crate::models::{Instance, Node};
use std::collections::BTreeMap;

/// Accumulates instance data in any order and links it in [`build`](Self::build).
///
/// Counts must be declared before the entities they allocate are addressed:
/// [`dimension`](Self::dimension) before node data,
/// [`customer_set_count`](Self::customer_set_count) before cluster data.
///
/// # Examples
///
/// ```
/// use u_gvrp::builder::InstanceBuilder;
///
/// # fn main() -> u_gvrp::error::Result<()> {
/// let mut builder = InstanceBuilder::new();
/// builder
///     .name("demo")
///     .dimension(3)?
///     .fleet_size(1)?
///     .vehicle_capacity(10)?
///     .customer_set_count(1)?
///     .customer_position(1, 0, 0)?
///     .customer_position(2, 3, 4)?
///     .customer_position(3, 6, 8)?
///     .customer_set(2, 1)?
///     .customer_set(3, 1)?
///     .customer_set_demand(1, 4)?;
/// let instance = builder.build()?;
/// assert_eq!(instance.depot().id(), 1);
/// assert_eq!(instance.clusters()[0].len(), 2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct InstanceBuilder {
    name: Option<String>,
    nodes: Vec<NodeBuilder>,
    clusters: Vec<ClusterBuilder>,
    // node index -> cluster index
    memberships: BTreeMap<usize, usize>,
    fleet_size: usize,
    vehicle_capacity: i32,
    config: InstanceConfig,
}

impl InstanceBuilder {
    /// Creates a builder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder with the given configuration.
    pub fn with_config(config: InstanceConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Sets the instance name.
    pub fn name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = Some(name.into());
        self
    }

    /// Allocates node drafts with ids `1..=d`, replacing any earlier ones.
    ///
    /// Allocation is eager; readers bound `d` by the input they hold.
    pub fn dimension(&mut self, d: i32) -> Result<&mut Self> {
        let d = positive("DIMENSION", d)?;
        self.nodes = (1..=d).map(NodeBuilder::new).collect();
        self.memberships.clear();
        Ok(self)
    }

    /// Sets the number of vehicles.
    pub fn fleet_size(&mut self, count: i32) -> Result<&mut Self> {
        self.fleet_size = positive("VEHICLES", count)?;
        Ok(self)
    }

    /// Sets the capacity of every vehicle.
    pub fn vehicle_capacity(&mut self, capacity: i32) -> Result<&mut Self> {
        positive("CAPACITY", capacity)?;
        self.vehicle_capacity = capacity;
        Ok(self)
    }

    /// Allocates cluster drafts with ids `1..=count`, replacing any earlier ones.
    pub fn customer_set_count(&mut self, count: i32) -> Result<&mut Self> {
        let count = positive("GVRP_SETS", count)?;
        self.clusters = (1..=count).map(ClusterBuilder::new).collect();
        self.memberships.clear();
        Ok(self)
    }

    /// Sets the coordinates of a node.
    pub fn customer_position(&mut self, node_id: i32, x: i32, y: i32) -> Result<&mut Self> {
        let idx = index_of(EntityKind::Node, node_id, self.nodes.len())?;
        self.nodes[idx].position(x, y);
        Ok(self)
    }

    /// Records that a node belongs to a cluster.
    ///
    /// A node assigned twice keeps its last cluster.
    pub fn customer_set(&mut self, node_id: i32, set_id: i32) -> Result<&mut Self> {
        let node = index_of(EntityKind::Node, node_id, self.nodes.len())?;
        let cluster = index_of(EntityKind::Cluster, set_id, self.clusters.len())?;
        if let Some(prev) = self.memberships.insert(node, cluster) {
            if prev != cluster {
                tracing::warn!(
                    node = node_id,
                    from = prev + 1,
                    to = set_id,
                    "node reassigned to another cluster"
                );
            }
        }
        Ok(self)
    }

    /// Checks that `set_id` addresses an allocated cluster.
    pub(crate) fn check_cluster_id(&self, set_id: i32) -> Result<()> {
        index_of(EntityKind::Cluster, set_id, self.clusters.len()).map(|_| ())
    }

    /// Sets the demand of a cluster.
    pub fn customer_set_demand(&mut self, set_id: i32, demand: i32) -> Result<&mut Self> {
        let idx = index_of(EntityKind::Cluster, set_id, self.clusters.len())?;
        self.clusters[idx].demand(demand)?;
        Ok(self)
    }

    /// Sets the candidate neighbour set size.
    pub fn neighbor_param(&mut self, k: usize) -> &mut Self {
        self.config.k = k;
        self
    }

    /// Sets the depot inference rule.
    pub fn depot_policy(&mut self, policy: DepotPolicy) -> &mut Self {
        self.config.depot_policy = policy;
        self
    }

    /// Links every draft into an immutable [`Instance`].
    ///
    /// Clusters are materialized first, then nodes in ascending id order: a
    /// node with a cluster edge joins that cluster, a node without one is
    /// depot-eligible. Which eligible node becomes the depot is decided by
    /// the configured [`DepotPolicy`].
    pub fn build(self) -> Result<Instance> {
        if self.nodes.is_empty() {
            return Err(GvrpError::NonPositive {
                field: "DIMENSION",
                value: 0,
            });
        }
        if self.clusters.is_empty() {
            return Err(GvrpError::NonPositive {
                field: "GVRP_SETS",
                value: 0,
            });
        }
        if self.fleet_size == 0 {
            return Err(GvrpError::NonPositive {
                field: "VEHICLES",
                value: 0,
            });
        }
        if self.vehicle_capacity <= 0 {
            return Err(GvrpError::NonPositive {
                field: "CAPACITY",
                value: i64::from(self.vehicle_capacity),
            });
        }
        if self.config.k == 0 {
            return Err(GvrpError::NonPositive { field: "k", value: 0 });
        }

        let mut clusters = self
            .clusters
            .iter()
            .map(ClusterBuilder::build)
            .collect::<Result<Vec<_>>>()?;

        let mut nodes = Vec::with_capacity(self.nodes.len());
        let mut unassigned: Vec<Node> = Vec::new();
        for (idx, draft) in self.nodes.iter().enumerate() {
            match self.memberships.get(&idx) {
                Some(&c) => {
                    let node = draft.build(Some(clusters[c].id()))?;
                    clusters[c].add_member(node);
                    nodes.push(node);
                }
                None => {
                    let node = draft.build(None)?;
                    unassigned.push(node);
                    nodes.push(node);
                }
            }
        }

        let (depot, customers) = match self.config.depot_policy {
            DepotPolicy::LastUnassigned => {
                let depot = *unassigned.last().ok_or(GvrpError::MissingDepot)?;
                if unassigned.len() > 1 {
                    let ids: Vec<usize> = unassigned.iter().map(Node::id).collect();
                    tracing::warn!(
                        nodes = ?ids,
                        depot = depot.id(),
                        "more than one node without cluster, last one is the depot"
                    );
                }
                (depot, nodes.clone())
            }
            DepotPolicy::UniqueUnassigned => match unassigned.as_slice() {
                [] => return Err(GvrpError::MissingDepot),
                [depot] => {
                    let customers = nodes.iter().filter(|n| *n != depot).copied().collect();
                    (*depot, customers)
                }
                many => {
                    return Err(GvrpError::AmbiguousDepot {
                        node_ids: many.iter().map(Node::id).collect(),
                    })
                }
            },
        };

        let name = self.name.unwrap_or_default();
        tracing::debug!(
            name = %name,
            nodes = nodes.len(),
            clusters = clusters.len(),
            depot = depot.id(),
            "instance built"
        );

        Ok(Instance::new(
            name,
            depot,
            nodes,
            customers,
            clusters,
            self.fleet_size,
            self.vehicle_capacity,
            self.config.k,
        ))
    }
}

fn positive(field: &'static str, value: i32) -> Result<usize> {
    if value <= 0 {
        return Err(GvrpError::NonPositive {
            field,
            value: i64::from(value),
        });
    }
    Ok(value as usize)
}

fn index_of(entity: EntityKind, id: i32, max: usize) -> Result<usize> {
    if id < 1 || id as usize > max {
        return Err(GvrpError::IdOutOfRange {
            entity,
            id: i64::from(id),
            max,
        });
    }
    Ok(id as usize - 1)
}
