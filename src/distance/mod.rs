//! Distance matrix and candidate neighbour sets.
//!
//! Both are computed once, when an instance is built, from its node list.

mod candidates;
mod matrix;

pub use candidates::CandidateSet;
pub use matrix::DistanceMatrix;
