//! # u-gvrp
//!
//! Generalized Vehicle Routing Problem (GVRP) data model: customers are
//! grouped into clusters, a vehicle visits one member of a cluster to satisfy
//! its demand, and every route starts and ends at a single depot.
//!
//! ## Modules
//!
//! - [`format`] — Reader for the GVRP text format
//! - [`builder`] — Order-independent instance construction and linking
//! - [`models`] — Domain model types (Node, Cluster, Instance, Route, Solution)
//! - [`distance`] — EUC_2D distance matrix and k-nearest candidate sets
//! - [`evaluation`] — Solution legality and cost
//! - [`config`] — Instance and checker configuration
//! - [`error`] — Parse and build errors
//!
//! ## Pipeline
//!
//! ```
//! use std::sync::Arc;
//! use u_gvrp::config::InstanceConfig;
//! use u_gvrp::evaluation::{cost, is_valid};
//! use u_gvrp::format::parse_instance;
//! use u_gvrp::models::Solution;
//!
//! let text = "NAME : demo COMMENT : GVRP DIMENSION : 3 VEHICLES : 1 GVRP_SETS : 1 \
//!             CAPACITY : 10 EDGE_WEIGHT_TYPE : EUC_2D \
//!             NODE_COORD_SECTION 1 0 0 2 3 4 3 0 8 \
//!             GVRP_SET_SECTION 1 2 3 -1 DEMAND_SECTION 1 4";
//! let instance = Arc::new(parse_instance(text, &InstanceConfig::default()).unwrap());
//!
//! let mut solution = Solution::new(instance.clone());
//! solution.routes_mut()[0].push(*instance.node(2).unwrap());
//! assert!(is_valid(&solution));
//! assert_eq!(cost(&solution), 10.0);
//! ```

pub mod builder;
pub mod config;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod format;
pub mod models;

#[cfg(test)]
mod fixtures;
