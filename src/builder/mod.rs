//! Order-independent construction of instances.
//!
//! Entities are pre-allocated in an arena addressed by dense 1-based ids and
//! filled in as input arrives, in whatever order it arrives. Cluster
//! membership is recorded as node → cluster edges and only resolved by
//! [`InstanceBuilder::build`], the single step that produces immutable
//! [`Node`](crate::models::Node), [`Cluster`](crate::models::Cluster) and
//! [`Instance`](crate::models::Instance) values.

mod entity;
mod instance;

pub use entity::{ClusterBuilder, NodeBuilder};
pub use instance::InstanceBuilder;
