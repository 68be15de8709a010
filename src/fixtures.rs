//! Shared test instances.

use crate::config::InstanceConfig;
use crate::format::parse_instance;
use crate::models::Instance;
use std::sync::Arc;

/// Six nodes, depot 1, clusters {2, 3} (demand 4), {4, 5} (5), {6} (3).
pub(crate) const SMALL: &str = include_str!("../tests/fixtures/small.gvrp");

pub(crate) fn small_instance() -> Arc<Instance> {
    Arc::new(parse_instance(SMALL, &InstanceConfig::default()).expect("fixture parses"))
}
