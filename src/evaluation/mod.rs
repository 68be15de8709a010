//! Solution legality and cost.
//!
//! Both operations are total: an illegal solution is reported through the
//! return value, never through an error.

mod checker;

pub use checker::{cost, is_valid, SolutionChecker};
