//! Domain model types for the Generalized VRP.
//!
//! Nodes grouped into demand-bearing clusters, the immutable instance that
//! links them, and routes/solutions built on top of a shared instance.

mod cluster;
mod instance;
mod node;
mod route;
mod solution;

pub use cluster::Cluster;
pub use instance::Instance;
pub use node::Node;
pub use route::Route;
pub use solution::{Solution, Violation, ViolationType};
